//! jsonbench CLI
//!
//! `jsonbench [run]`               run the benchmark
//! `jsonbench list`                show every registered candidate
//! `jsonbench save-config <path>`  write the effective configuration

use anyhow::Context;
use jsonbench::candidate::{self, REGISTRY};
use jsonbench::{logging, run_benchmarks, Config};
use std::env;
use std::io::{self, Write};
use tracing::info;

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let config = Config::from_env()?;
    logging::init(&config.logging)?;

    let args: Vec<String> = env::args().collect();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.get(1).map(String::as_str) {
        None | Some("run") => {
            info!(runs = config.runs, repeats = config.repeats, "starting benchmark");
            run_benchmarks(&config, &mut out).context("benchmark run failed")?;
        }
        Some("list") => {
            for (name, _) in REGISTRY {
                match candidate::resolve(name, &config) {
                    Ok(c) => writeln!(out, "{:<20} {}", name, c.display_name())?,
                    Err(e) => writeln!(out, "{:<20} unavailable ({})", name, e)?,
                }
            }
        }
        Some("save-config") => {
            let path = args.get(2).context("usage: jsonbench save-config <path>")?;
            config
                .save(path)
                .with_context(|| format!("failed to write {}", path))?;
            info!(path = %path, "configuration saved");
        }
        Some(other) => {
            anyhow::bail!("unknown command '{}' (expected run, list or save-config)", other);
        }
    }

    Ok(())
}
