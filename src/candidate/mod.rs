//! Candidate codecs under measurement

pub mod canonical;
pub mod registry;

pub use registry::{resolve, resolve_all, Loader, REGISTRY};

use crate::config::EncodeStyle;
use crate::error::{BenchError, Result};
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::hint::black_box;

/// Kind of work a benchmark case asks of a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Decode,
    Encode,
}

/// Closed set of codec strategies
pub enum Codec {
    /// One-shot `serde_json` calls
    SerdeJson { style: EncodeStyle },
    /// `serde_json` with a persistent encoder
    SerdeJsonStatic(StaticCodec),
    /// Encode-only, sorted keys and compact separators
    Canonical,
    #[cfg(feature = "simd")]
    SimdJson(SimdCodec),
    #[cfg(feature = "sonic")]
    SonicRs,
}

/// A resolved candidate: its codec plus the version it reports
pub struct Candidate {
    name: &'static str,
    version: &'static str,
    codec: Codec,
}

impl Candidate {
    pub fn new(name: &'static str, version: &'static str, codec: Codec) -> Self {
        Self {
            name,
            version,
            codec,
        }
    }

    pub fn name(&self) -> &str {
        self.name
    }

    /// Name used in progress output and the result table
    pub fn display_name(&self) -> String {
        format!("{} {}", self.name, self.version)
    }

    pub fn supports(&self, op: Operation) -> bool {
        !matches!((&self.codec, op), (Codec::Canonical, Operation::Decode))
    }

    /// Decode one document and discard the result
    pub fn decode(&mut self, input: &str) -> Result<()> {
        let name = self.name;
        match &mut self.codec {
            Codec::SerdeJson { .. } => {
                let value: Value =
                    serde_json::from_str(input).map_err(|e| BenchError::codec(name, e))?;
                black_box(value);
            }
            Codec::SerdeJsonStatic(codec) => {
                let value = codec.decode(input).map_err(|e| BenchError::codec(name, e))?;
                black_box(value);
            }
            Codec::Canonical => {
                return Err(BenchError::codec(name, "decode is not supported"));
            }
            #[cfg(feature = "simd")]
            Codec::SimdJson(codec) => {
                let value = codec.decode(input).map_err(|e| BenchError::codec(name, e))?;
                black_box(value);
            }
            #[cfg(feature = "sonic")]
            Codec::SonicRs => {
                let value: sonic_rs::Value =
                    sonic_rs::from_str(input).map_err(|e| BenchError::codec(name, e))?;
                black_box(value);
            }
        }
        Ok(())
    }

    /// Encode one value, returning the encoded length in bytes
    pub fn encode(&mut self, value: &Value) -> Result<usize> {
        let name = self.name;
        let len = match &mut self.codec {
            Codec::SerdeJson { style } => {
                let out = match style {
                    EncodeStyle::Compact => serde_json::to_string(value),
                    EncodeStyle::Pretty => serde_json::to_string_pretty(value),
                }
                .map_err(|e| BenchError::codec(name, e))?;
                black_box(out).len()
            }
            Codec::SerdeJsonStatic(codec) => {
                codec.encode(value).map_err(|e| BenchError::codec(name, e))?
            }
            Codec::Canonical => {
                let out = canonical::to_vec(value).map_err(|e| BenchError::codec(name, e))?;
                black_box(out).len()
            }
            #[cfg(feature = "simd")]
            Codec::SimdJson(_) => {
                let out =
                    simd_json::serde::to_vec(value).map_err(|e| BenchError::codec(name, e))?;
                black_box(out).len()
            }
            #[cfg(feature = "sonic")]
            Codec::SonicRs => {
                let out = sonic_rs::to_vec(value).map_err(|e| BenchError::codec(name, e))?;
                black_box(out).len()
            }
        };
        Ok(len)
    }
}

impl std::fmt::Debug for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Candidate")
            .field("name", &self.name)
            .field("version", &self.version)
            .field("decode", &self.supports(Operation::Decode))
            .field("encode", &self.supports(Operation::Encode))
            .finish()
    }
}

/// serde_json codec whose encoder persists across calls: a fixed formatter
/// and one reused output buffer, so only the first call pays for growth.
/// Decoding holds no state and matches the one-shot path.
pub struct StaticCodec {
    style: EncodeStyle,
    buf: Vec<u8>,
}

impl StaticCodec {
    pub fn new(style: EncodeStyle) -> Self {
        Self {
            style,
            buf: Vec::new(),
        }
    }

    pub fn decode(&self, input: &str) -> serde_json::Result<Value> {
        let mut de = serde_json::Deserializer::from_str(input);
        let value = Value::deserialize(&mut de)?;
        de.end()?;
        Ok(value)
    }

    pub fn encode(&mut self, value: &Value) -> serde_json::Result<usize> {
        self.buf.clear();
        match self.style {
            EncodeStyle::Compact => {
                let mut ser = serde_json::Serializer::new(&mut self.buf);
                value.serialize(&mut ser)?;
            }
            EncodeStyle::Pretty => {
                let formatter = PrettyFormatter::with_indent(b"  ");
                let mut ser = serde_json::Serializer::with_formatter(&mut self.buf, formatter);
                value.serialize(&mut ser)?;
            }
        }
        Ok(self.buf.len())
    }

    #[cfg(test)]
    fn last_output(&self) -> &[u8] {
        &self.buf
    }
}

/// simd-json parses in place, so input is copied into a reused scratch buffer
#[cfg(feature = "simd")]
pub struct SimdCodec {
    scratch: Vec<u8>,
}

#[cfg(feature = "simd")]
impl SimdCodec {
    pub fn new() -> Self {
        Self {
            scratch: Vec::new(),
        }
    }

    pub fn decode(&mut self, input: &str) -> simd_json::Result<simd_json::OwnedValue> {
        self.scratch.clear();
        self.scratch.extend_from_slice(input.as_bytes());
        simd_json::to_owned_value(&mut self.scratch)
    }
}

#[cfg(feature = "simd")]
impl Default for SimdCodec {
    fn default() -> Self {
        Self::new()
    }
}
