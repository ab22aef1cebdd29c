//! Static registry mapping candidate names to loaders

use super::{Candidate, Codec, StaticCodec};
use crate::config::Config;
use crate::error::{BenchError, Result};
use std::io::Write;
use tracing::{info, warn};

/// Builds a candidate, or explains why it cannot be built
pub type Loader = fn(&Config) -> Result<Candidate>;

/// Every candidate this build knows about
pub const REGISTRY: &[(&str, Loader)] = &[
    ("serde_json", load_serde_json),
    ("serde_json_static", load_serde_json_static),
    ("canonical", load_canonical),
    ("simd_json", load_simd_json),
    ("sonic_rs", load_sonic_rs),
];

const SERDE_JSON_VERSION: &str = match option_env!("JSONBENCH_VERSION_SERDE_JSON") {
    Some(v) => v,
    None => "unknown",
};

#[cfg(feature = "simd")]
const SIMD_JSON_VERSION: &str = match option_env!("JSONBENCH_VERSION_SIMD_JSON") {
    Some(v) => v,
    None => "unknown",
};

#[cfg(feature = "sonic")]
const SONIC_RS_VERSION: &str = match option_env!("JSONBENCH_VERSION_SONIC_RS") {
    Some(v) => v,
    None => "unknown",
};

/// Resolve a single candidate by name
pub fn resolve(name: &str, config: &Config) -> Result<Candidate> {
    let (_, loader) = REGISTRY
        .iter()
        .find(|(entry, _)| *entry == name)
        .ok_or_else(|| BenchError::UnknownCandidate(name.to_string()))?;
    loader(config)
}

/// Resolve every name in order, skipping the ones that fail with a notice on `out`
pub fn resolve_all<W: Write>(
    names: &[String],
    config: &Config,
    out: &mut W,
) -> Result<Vec<Candidate>> {
    let mut candidates = Vec::with_capacity(names.len());

    for name in names {
        match resolve(name, config) {
            Ok(candidate) => {
                info!(candidate = %candidate.display_name(), "candidate resolved");
                candidates.push(candidate);
            }
            Err(e) => {
                warn!(candidate = %name, error = %e, "skipping candidate");
                writeln!(out, "Unable to load {}: {}", name, e)?;
            }
        }
    }

    Ok(candidates)
}

fn load_serde_json(config: &Config) -> Result<Candidate> {
    let style = config.encode_style("serde_json");
    Ok(Candidate::new("serde_json", SERDE_JSON_VERSION, Codec::SerdeJson { style }))
}

fn load_serde_json_static(config: &Config) -> Result<Candidate> {
    let codec = StaticCodec::new(config.encode_style("serde_json_static"));
    Ok(Candidate::new(
        "serde_json_static",
        SERDE_JSON_VERSION,
        Codec::SerdeJsonStatic(codec),
    ))
}

fn load_canonical(_config: &Config) -> Result<Candidate> {
    Ok(Candidate::new("canonical", SERDE_JSON_VERSION, Codec::Canonical))
}

#[cfg(feature = "simd")]
fn load_simd_json(_config: &Config) -> Result<Candidate> {
    Ok(Candidate::new(
        "simd_json",
        SIMD_JSON_VERSION,
        Codec::SimdJson(super::SimdCodec::new()),
    ))
}

#[cfg(not(feature = "simd"))]
fn load_simd_json(_config: &Config) -> Result<Candidate> {
    Err(BenchError::Unavailable {
        name: "simd_json".to_string(),
        reason: "built without the `simd` feature".to_string(),
    })
}

#[cfg(feature = "sonic")]
fn load_sonic_rs(_config: &Config) -> Result<Candidate> {
    Ok(Candidate::new("sonic_rs", SONIC_RS_VERSION, Codec::SonicRs))
}

#[cfg(not(feature = "sonic"))]
fn load_sonic_rs(_config: &Config) -> Result<Candidate> {
    Err(BenchError::Unavailable {
        name: "sonic_rs".to_string(),
        reason: "built without the `sonic` feature".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::Operation;

    #[test]
    fn test_registry_names_are_unique() {
        for (i, (name, _)) in REGISTRY.iter().enumerate() {
            assert!(REGISTRY[i + 1..].iter().all(|(other, _)| other != name));
        }
    }

    #[test]
    fn test_resolve_known() {
        let config = Config::default();
        let candidate = resolve("serde_json_static", &config).unwrap();
        assert_eq!(candidate.name(), "serde_json_static");
        assert_eq!(
            candidate.display_name(),
            format!("serde_json_static {}", SERDE_JSON_VERSION)
        );

        let canonical = resolve("canonical", &config).unwrap();
        assert!(!canonical.supports(Operation::Decode));
    }

    #[test]
    fn test_resolve_unknown() {
        let err = resolve("yajl", &Config::default()).unwrap_err();
        assert!(matches!(err, BenchError::UnknownCandidate(name) if name == "yajl"));
    }

    #[test]
    fn test_resolve_all_skips_failures() {
        let names: Vec<String> = ["serde_json", "yajl", "canonical"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let mut out = Vec::new();
        let candidates = resolve_all(&names, &Config::default(), &mut out).unwrap();

        let resolved: Vec<&str> = candidates.iter().map(|c| c.name()).collect();
        assert_eq!(resolved, vec!["serde_json", "canonical"]);

        let notice = String::from_utf8(out).unwrap();
        assert_eq!(notice, "Unable to load yajl: unknown candidate 'yajl'\n");
    }

    #[cfg(not(feature = "sonic"))]
    #[test]
    fn test_feature_gated_candidate_is_unavailable() {
        let err = resolve("sonic_rs", &Config::default()).unwrap_err();
        assert!(matches!(err, BenchError::Unavailable { .. }));
    }
}
