//! Trial timing
//! A trial times `runs` back-to-back calls; the fastest of `repeats` trials wins.

use std::hint::black_box;
use std::time::{Duration, Instant};

/// Outcome of measuring one operation
#[derive(Debug, Clone)]
pub struct Measurement {
    /// Cold first call, reported but never aggregated
    pub first_run: Duration,
    /// Total time of each trial
    pub trials: Vec<Duration>,
    /// Calls per trial
    pub runs: usize,
    /// Best trial total divided by `runs`, in seconds
    pub per_iteration: f64,
}

impl std::fmt::Display for Measurement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} loops, best of {}: {:.6} sec per loop",
            self.runs,
            self.trials.len(),
            self.per_iteration
        )
    }
}

/// Time a single call of `f`
pub fn time_once<F, E>(mut f: F) -> Result<Duration, E>
where
    F: FnMut() -> Result<(), E>,
{
    let start = Instant::now();
    black_box(f())?;
    Ok(start.elapsed())
}

/// Run `repeats` trials of `runs` calls each and return every trial total
pub fn repeat<F, E>(runs: usize, repeats: usize, mut f: F) -> Result<Vec<Duration>, E>
where
    F: FnMut() -> Result<(), E>,
{
    let mut totals = Vec::with_capacity(repeats);

    for _ in 0..repeats {
        let start = Instant::now();
        for _ in 0..runs {
            black_box(f())?;
        }
        totals.push(start.elapsed());
    }

    Ok(totals)
}

/// Fastest trial total divided by `runs`, in seconds; 0 with no trials
pub fn best_per_iteration(totals: &[Duration], runs: usize) -> f64 {
    match totals.iter().min() {
        Some(best) if runs > 0 => best.as_secs_f64() / runs as f64,
        _ => 0.0,
    }
}

/// Cold call followed by the repeated trials
pub fn measure<F, E>(runs: usize, repeats: usize, mut f: F) -> Result<Measurement, E>
where
    F: FnMut() -> Result<(), E>,
{
    let first_run = time_once(&mut f)?;
    let trials = repeat(runs, repeats, &mut f)?;
    let per_iteration = best_per_iteration(&trials, runs);

    Ok(Measurement {
        first_run,
        trials,
        runs,
        per_iteration,
    })
}
