//! Walks a directory tree twice: a spinner counts the entries, then a
//! percentage bar reports a second pass over the same entries.
//!
//! Usage: `cargo run --example dirscan -- [directory]`

use std::path::{Path, PathBuf};

use term_tally::{Percentage, Spinner};

const COLUMNS: usize = 80;

fn main() {
    let dirname = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    // First pass: count entries under a spinner.
    let mut spinner = Spinner::new(COLUMNS).unwrap_or_else(|err| {
        eprintln!("dirscan: {err}");
        std::process::exit(1);
    });

    let mut total = 0usize;
    walk(&dirname, &mut |_| {
        total += 1;
        spinner.update("counting entries");
        spinner.write_to(&mut std::io::stderr()).unwrap();
    });
    spinner.update("counting entries: complete");
    spinner.write_to(&mut std::io::stderr()).unwrap();
    eprintln!();

    println!("There are {total} entries to process.");
    if total == 0 {
        return;
    }

    // Second pass: report completion over the known total.
    let mut percentage = Percentage::new(COLUMNS).unwrap_or_else(|err| {
        eprintln!("dirscan: {err}");
        std::process::exit(1);
    });

    let mut done = 0u64;
    walk(&dirname, &mut |path| {
        done += 1;
        percentage.update(
            &format!("doing work: {}", path.display()),
            done * 100 / total as u64,
        );
        percentage.write_to(&mut std::io::stderr()).unwrap();
    });
    eprintln!();
}

/// Depth-first walk calling `f` for every entry; unreadable directories are
/// skipped so the scan always finishes.
fn walk(dir: &Path, f: &mut impl FnMut(&Path)) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        f(&path);
        if path.is_dir() {
            walk(&path, f);
        }
    }
}
