use crate::error::RevencError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::str::FromStr;

/// Compression scheme applied by a pipeline, and the third field of the
/// envelope header.
///
/// The wire names are fixed: `"none"`, `"lz"` and `"gzip"`. The `"gzip"`
/// literal is historical — it selects the adaptive dictionary codec in
/// [`crate::codec::dictionary`], not RFC 1952 gzip — and is kept for
/// compatibility with envelopes already in the wild. `"lz77"` is accepted
/// as an alias of `"lz"` when parsing for the same reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CompressionMethod {
    #[default]
    #[serde(rename = "none")]
    None,
    #[serde(rename = "lz", alias = "lz77")]
    Lz,
    #[serde(rename = "gzip", alias = "dictionary")]
    Dictionary,
}

impl FromStr for CompressionMethod {
    type Err = RevencError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(CompressionMethod::None),
            "lz" | "lz77" => Ok(CompressionMethod::Lz),
            "gzip" | "dictionary" => Ok(CompressionMethod::Dictionary),
            _ => Err(RevencError::Config(format!(
                "Invalid compression method: {}",
                s
            ))),
        }
    }
}

/// Full description of what a pipeline does to its input.
///
/// Transform names are kept in application order, duplicates included;
/// reversal depends on replaying the exact recorded sequence backwards.
/// `metadata` is carried for caller bookkeeping only and is never
/// interpreted by the pipeline.
#[derive(Debug, Clone, Default)]
pub struct PipelineConfig {
    pub transforms: Vec<String>,
    pub compression: CompressionMethod,
    pub reversible: bool,
    pub metadata: Map<String, Value>,
}

impl PipelineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_transform(mut self, name: impl Into<String>) -> Self {
        self.transforms.push(name.into());
        self
    }

    pub fn with_compression(mut self, method: CompressionMethod) -> Self {
        self.compression = method;
        self
    }

    pub fn with_reversibility(mut self, reversible: bool) -> Self {
        self.reversible = reversible;
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }
}
