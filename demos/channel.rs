//! A render loop owning the bar while other threads feed it messages.
//!
//! The worker reports completion over an mpsc channel; a second thread
//! stands in for a terminal-resize handler and injects a new width partway
//! through the run. Only the atomic width crosses threads in the library;
//! here the whole bar stays on the render loop's thread and resize arrives
//! as a message.

use std::sync::mpsc;
use std::time::Duration;

use term_tally::Percentage;

enum Event {
    Progress(u64),
    Resize(usize),
    Done,
}

fn main() {
    let (tx, rx) = mpsc::channel();

    let progress = tx.clone();
    std::thread::spawn(move || {
        for i in 0..=100 {
            progress.send(Event::Progress(i)).unwrap();
            sleep(40);
        }
        progress.send(Event::Done).unwrap();
    });

    std::thread::spawn(move || {
        sleep(1500);
        tx.send(Event::Resize(50)).unwrap();
    });

    let mut bar = Percentage::new(80).unwrap_or_else(|err| {
        eprintln!("channel: {err}");
        std::process::exit(1);
    });

    while let Ok(event) = rx.recv() {
        match event {
            Event::Progress(i) => {
                bar.update("downloading layers", i);
                bar.write_to(&mut std::io::stdout()).unwrap();
            }
            Event::Resize(width) => bar.resize(width),
            Event::Done => break,
        }
    }
    println!(); // newline after the finished bar
}

fn sleep(ms: u64) {
    std::thread::sleep(Duration::from_millis(ms));
}
