//! Both bars sharing one terminal line, including a sweep past 100 to show
//! the fill clamping while the printed number keeps the raw value.
//!
//! Usage: `cargo run --example both -- [columns] [message]`

use std::time::Duration;

use term_tally::{Percentage, Spinner};

fn main() {
    let (width, message) = args();

    let mut percentage = Percentage::new(width).unwrap_or_else(|err| {
        eprintln!("both: {err}");
        std::process::exit(1);
    });
    let mut spinner = Spinner::new(width).unwrap_or_else(|err| {
        eprintln!("both: {err}");
        std::process::exit(1);
    });

    for i in 0..=101 {
        percentage.update(&message, i);
        percentage.write_to(&mut std::io::stdout()).unwrap();
        std::thread::sleep(Duration::from_millis(20));
    }
    println!();

    for i in 0..=100 {
        spinner.update(&format!("doing some other stuff: {i}"));
        spinner.write_to(&mut std::io::stdout()).unwrap();
        std::thread::sleep(Duration::from_millis(20));
    }
    println!();

    for i in 0..=100 {
        percentage.update(&message, i);
        percentage.write_to(&mut std::io::stdout()).unwrap();
        std::thread::sleep(Duration::from_millis(20));
    }
    println!();
}

fn args() -> (usize, String) {
    let mut args = std::env::args().skip(1);
    let width = args.next().and_then(|a| a.parse().ok()).unwrap_or(80);
    let message = args.next().unwrap_or_else(|| "crunching".to_string());
    (width, message)
}
