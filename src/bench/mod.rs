//! Benchmark module
//! Timing, the static case list and the result table

pub mod case;
pub mod results;
pub mod timer;

pub use case::{BenchCase, Shape, CASES};
pub use results::ResultTable;
pub use timer::{best_per_iteration, measure, Measurement};
