//! Benchmark runner
//! Loads the datasets, resolves candidates, measures every applicable case and
//! prints the result table.

use crate::bench::{measure, ResultTable, CASES};
use crate::candidate::{self, Candidate};
use crate::config::Config;
use crate::data::Dataset;
use crate::error::Result;
use std::io::Write;
use tracing::{debug, info};

/// Trial shape shared by every case
#[derive(Debug, Clone, Copy)]
pub struct Runner {
    runs: usize,
    repeats: usize,
}

impl Runner {
    pub fn new(runs: usize, repeats: usize) -> Self {
        Self { runs, repeats }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.runs, config.repeats)
    }

    /// Measure every candidate on every case it supports, reporting progress on `out`
    pub fn run<W: Write>(
        &self,
        candidates: &mut [Candidate],
        data: &Dataset,
        out: &mut W,
    ) -> Result<ResultTable> {
        let mut results = ResultTable::new();

        for candidate in candidates.iter_mut() {
            let display_name = candidate.display_name();
            writeln!(out, "Running {} benchmarks...", display_name)?;
            info!(candidate = %display_name, "running benchmarks");

            for case in &CASES {
                if !case.applies_to(candidate) {
                    continue;
                }
                writeln!(out, "   {}...", case.label)?;

                let m = measure(self.runs, self.repeats, || case.run(candidate, data))?;
                writeln!(out, "      first run: {:.6}", m.first_run.as_secs_f64())?;
                writeln!(out, "      {}", m)?;
                debug!(
                    candidate = %display_name,
                    case = case.label,
                    trials = ?m.trials,
                    per_iteration = m.per_iteration,
                    "case measured"
                );

                results.record(case.label, &display_name, m.per_iteration);
            }
        }

        Ok(results)
    }
}

/// Full benchmark run as configured, returning the table that was printed
pub fn run_benchmarks<W: Write>(config: &Config, out: &mut W) -> Result<ResultTable> {
    config.validate()?;
    let data = Dataset::load(&config.data.large_path, &config.data.small_path)?;

    let mut candidates = candidate::resolve_all(&config.candidates, config, out)?;
    let results = Runner::from_config(config).run(&mut candidates, &data, out)?;

    writeln!(out, "\nResults\n=======")?;
    write!(out, "{}", results)?;
    Ok(results)
}
