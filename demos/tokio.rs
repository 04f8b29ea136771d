//! Async variant of the channel demo: concurrent downloads report chunk
//! completions over an unbounded channel, and one render task aggregates
//! them into a single percentage line.

use std::time::Duration;

use term_tally::Percentage;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() {
    let (tx, mut rx) = mpsc::unbounded_channel();

    let total_kb: u64 = PACKAGES.iter().map(|p| p.size_kb).sum();

    let render = tokio::spawn(async move {
        let mut bar = Percentage::new(80).unwrap_or_else(|err| {
            eprintln!("tokio: {err}");
            std::process::exit(1);
        });

        let mut done = 0u64;
        while let Some((name, kb)) = rx.recv().await {
            done += kb;
            bar.update(&format!("fetching {name}"), done * 100 / total_kb);
            bar.write_to(&mut std::io::stdout()).unwrap();
        }
        println!(); // newline after the finished bar
    });

    let downloads: Vec<_> = PACKAGES
        .iter()
        .map(|pkg| {
            let tx = tx.clone();
            tokio::spawn(async move {
                const CHUNKS: u64 = 8;
                for _ in 0..CHUNKS {
                    tokio::time::sleep(Duration::from_millis(40 + pkg.size_kb / 4)).await;
                    tx.send((pkg.name, pkg.size_kb / CHUNKS)).unwrap();
                }
                // Integer division remainder, so the bar lands on 100%.
                tx.send((pkg.name, pkg.size_kb % CHUNKS)).unwrap();
            })
        })
        .collect();

    drop(tx);
    for dl in downloads {
        dl.await.unwrap();
    }
    render.await.unwrap();
}

struct Package {
    name: &'static str,
    size_kb: u64,
}

const PACKAGES: &[Package] = &[
    Package {
        name: "serde",
        size_kb: 320,
    },
    Package {
        name: "tokio",
        size_kb: 890,
    },
    Package {
        name: "syn",
        size_kb: 1240,
    },
    Package {
        name: "quote",
        size_kb: 85,
    },
    Package {
        name: "mio",
        size_kb: 210,
    },
];
