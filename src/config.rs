//! Configuration module

use crate::error::{BenchError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Environment variable naming the config file
pub const CONFIG_ENV: &str = "JSONBENCH_CONFIG";

/// Config file used when `JSONBENCH_CONFIG` is unset
pub const DEFAULT_CONFIG_PATH: &str = "jsonbench.json";

/// Main configuration struct
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Repetitions of an operation inside one timed trial
    pub runs: usize,

    /// Independent trials per case; the fastest one is kept
    pub repeats: usize,

    /// Candidates to benchmark, in order
    pub candidates: Vec<String>,

    /// Dataset locations
    pub data: DataConfig,

    /// Per-candidate encode style
    pub encode_styles: HashMap<String, EncodeStyle>,

    /// Logging settings
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub large_path: PathBuf,
    pub small_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EncodeStyle {
    #[default]
    Compact,
    Pretty,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            runs: 20,
            repeats: 5,
            candidates: vec![
                "serde_json".to_string(),
                "serde_json_static".to_string(),
                "canonical".to_string(),
                "simd_json".to_string(),
                "sonic_rs".to_string(),
            ],
            data: DataConfig::default(),
            encode_styles: HashMap::new(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            large_path: PathBuf::from("data/large.json"),
            small_path: PathBuf::from("data/one-json-per-line.txt"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_output: false,
        }
    }
}

impl Config {
    /// Load config from environment
    pub fn from_env() -> anyhow::Result<Self> {
        let config_path =
            std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let config = Config::from_sources(Some(Path::new(&config_path)), |key| {
            std::env::var(key).ok()
        })?;
        Ok(config)
    }

    /// File (when it exists) over defaults, then `var` overrides over both
    pub fn from_sources<F>(path: Option<&Path>, var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match path {
            Some(path) if path.exists() => Config::load(path)?,
            _ => Config::default(),
        };

        config.apply_overrides(var)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON config file; absent fields keep their defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| BenchError::io(path, e))?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Apply `JSONBENCH_*` overrides looked up through `var`
    pub fn apply_overrides<F>(&mut self, var: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(runs) = var("JSONBENCH_RUNS") {
            self.runs = parse_count("JSONBENCH_RUNS", &runs)?;
        }
        if let Some(repeats) = var("JSONBENCH_REPEATS") {
            self.repeats = parse_count("JSONBENCH_REPEATS", &repeats)?;
        }
        if let Some(list) = var("JSONBENCH_CANDIDATES") {
            self.candidates = list
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect();
        }
        if let Some(path) = var("JSONBENCH_LARGE") {
            self.data.large_path = PathBuf::from(path);
        }
        if let Some(path) = var("JSONBENCH_SMALL") {
            self.data.small_path = PathBuf::from(path);
        }
        if let Some(level) = var("JSONBENCH_LOG") {
            self.logging.level = level;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.runs == 0 {
            return Err(BenchError::Config("runs must be at least 1".to_string()));
        }
        if self.repeats == 0 {
            return Err(BenchError::Config("repeats must be at least 1".to_string()));
        }
        if self.candidates.is_empty() {
            return Err(BenchError::Config("no candidates configured".to_string()));
        }
        Ok(())
    }

    /// Encode style configured for a candidate, compact when unset
    pub fn encode_style(&self, candidate: &str) -> EncodeStyle {
        self.encode_styles.get(candidate).copied().unwrap_or_default()
    }

    /// Save config to file
    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

fn parse_count(key: &str, value: &str) -> Result<usize> {
    value
        .trim()
        .parse()
        .map_err(|_| {
            BenchError::Config(format!("{} must be a whole number, got '{}'", key, value))
        })
}
