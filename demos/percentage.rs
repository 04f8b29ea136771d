//! A 0..=100 sweep on a single percentage line.
//!
//! Usage: `cargo run --example percentage -- [columns] [message]`

use std::time::Duration;

use term_tally::Percentage;

fn main() {
    let (width, message) = args();

    let mut bar = Percentage::new(width).unwrap_or_else(|err| {
        eprintln!("percentage: {err}");
        std::process::exit(1);
    });

    for i in 0..=100 {
        bar.update(&message, i);
        bar.write_to(&mut std::io::stdout()).unwrap();
        std::thread::sleep(Duration::from_millis(20));
    }
    println!(); // newline after the finished bar
}

fn args() -> (usize, String) {
    let mut args = std::env::args().skip(1);
    let width = args.next().and_then(|a| a.parse().ok()).unwrap_or(80);
    let message = args
        .next()
        .unwrap_or_else(|| "processing entries".to_string());
    (width, message)
}
