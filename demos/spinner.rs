//! A spinner animating over a changing message.
//!
//! Usage: `cargo run --example spinner -- [columns] [message]`

use std::time::Duration;

use term_tally::Spinner;

fn main() {
    let (width, message) = args();

    let mut bar = Spinner::new(width).unwrap_or_else(|err| {
        eprintln!("spinner: {err}");
        std::process::exit(1);
    });

    for i in 0..=42 {
        bar.update(&format!("{message}: {i}"));
        bar.write_to(&mut std::io::stdout()).unwrap();
        std::thread::sleep(Duration::from_millis(100));
    }

    bar.update(&format!("{message}: complete"));
    bar.write_to(&mut std::io::stdout()).unwrap();
    println!(); // newline after the finished bar
}

fn args() -> (usize, String) {
    let mut args = std::env::args().skip(1);
    let width = args.next().and_then(|a| a.parse().ok()).unwrap_or(80);
    let message = args.next().unwrap_or_else(|| "working".to_string());
    (width, message)
}
