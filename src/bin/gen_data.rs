//! Synthetic dataset writer
//!
//! `gen-data [DIR] [ITEMS] [LINES]` writes `large.json` and
//! `one-json-per-line.txt` into DIR (default `data`).

use anyhow::Context;
use jsonbench::data::generate;
use jsonbench::{logging, Config};
use std::env;
use std::path::PathBuf;
use tracing::info;

const DEFAULT_ITEMS: usize = 10_000;
const DEFAULT_LINES: usize = 1_000;

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let config = Config::from_env()?;
    logging::init(&config.logging)?;

    let args: Vec<String> = env::args().skip(1).collect();
    let dir = args.first().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("data"));
    let items = count_arg(&args, 1, DEFAULT_ITEMS)?;
    let lines = count_arg(&args, 2, DEFAULT_LINES)?;

    let (large, small) = generate::write_datasets(&dir, items, lines)
        .with_context(|| format!("failed to write datasets into {}", dir.display()))?;

    info!(items, lines, "datasets generated");
    println!("wrote {} ({} items)", large.display(), items);
    println!("wrote {} ({} lines)", small.display(), lines);
    Ok(())
}

fn count_arg(args: &[String], idx: usize, default: usize) -> anyhow::Result<usize> {
    match args.get(idx) {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("expected a count, got '{}'", raw)),
        None => Ok(default),
    }
}
