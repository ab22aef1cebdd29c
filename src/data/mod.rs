//! Benchmark datasets
//! One large document plus a file holding one small document per line

pub mod generate;

use crate::error::{BenchError, Result};
use serde_json::Value;
use std::path::Path;
use tracing::info;

/// Raw text and parsed values for both datasets
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Large document as read from disk, input of the decode cases
    pub large_raw: String,
    /// Large document parsed once, input of the encode cases
    pub large: Value,
    /// Non-blank lines of the line file
    pub small_raw: Vec<String>,
    /// Each line parsed once
    pub small: Vec<Value>,
}

impl Dataset {
    /// Read and parse both files. Missing or unparsable files are fatal.
    pub fn load(large_path: impl AsRef<Path>, small_path: impl AsRef<Path>) -> Result<Self> {
        let large_path = large_path.as_ref();
        let small_path = small_path.as_ref();

        let large_raw =
            std::fs::read_to_string(large_path).map_err(|e| BenchError::io(large_path, e))?;
        let small_text =
            std::fs::read_to_string(small_path).map_err(|e| BenchError::io(small_path, e))?;

        let dataset = Self::from_parts(large_raw, &small_text)?;
        info!(
            large = %large_path.display(),
            large_bytes = dataset.large_raw.len(),
            small = %small_path.display(),
            small_docs = dataset.small_raw.len(),
            "datasets loaded"
        );
        Ok(dataset)
    }

    /// Build a dataset from in-memory text
    pub fn from_parts(large_raw: String, small_text: &str) -> Result<Self> {
        let large = serde_json::from_str(&large_raw)?;

        let small_raw: Vec<String> = small_text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect();
        let small = small_raw
            .iter()
            .map(|line| serde_json::from_str(line))
            .collect::<std::result::Result<Vec<Value>, _>>()?;

        Ok(Self {
            large_raw,
            large,
            small_raw,
            small,
        })
    }
}
