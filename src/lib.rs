//! jsonbench
//!
//! Decode/encode timing shootout for JSON codecs.
//!
//! ## Architecture
//! - Data: the large document and the line file, read once
//! - Candidate: closed set of codec variants behind a static registry
//! - Bench: min-of-N trial timing, the four cases, the result table
//! - Runner: orchestration and progress output

pub mod bench;
pub mod candidate;
pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod runner;

pub use bench::{BenchCase, Measurement, ResultTable, CASES};
pub use candidate::{Candidate, Codec, Operation};
pub use config::{Config, EncodeStyle};
pub use data::Dataset;
pub use error::{BenchError, Result};
pub use runner::{run_benchmarks, Runner};
