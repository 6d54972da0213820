//! Reversible wire envelope.
//!
//! A reversible pipeline prefixes its output with a self-describing header
//! so `reverse` needs no external state:
//!
//! ```text
//! base64(JSON({"e": [transform...], "c": "none"|"lz"|"gzip", "m": {...}})) ":" payload
//! ```
//!
//! The separator is the FIRST `:` in the string. The payload may itself
//! contain `:` characters, so parsing must never split more than once.

use crate::config::{CompressionMethod, PipelineConfig};
use crate::error::{Result, RevencError};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const SEPARATOR: char = ':';

/// The decoded envelope header. Field names are the single-letter wire
/// keys; `m` is optional on the wire for producers that never set metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Header {
	#[serde(rename = "e")]
	pub transforms: Vec<String>,
	#[serde(rename = "c")]
	pub compression: CompressionMethod,
	#[serde(rename = "m", default)]
	pub metadata: Map<String, Value>,
}

impl Header {
	pub fn from_config(config: &PipelineConfig) -> Self {
		Self {
			transforms: config.transforms.clone(),
			compression: config.compression,
			metadata: config.metadata.clone(),
		}
	}
}

/// Prefix `payload` with the base64-encoded JSON header for `config`.
pub fn seal(config: &PipelineConfig, payload: &str) -> Result<String> {
	let header = Header::from_config(config);
	let json = serde_json::to_string(&header)?;
	let encoded = STANDARD.encode(json.as_bytes());
	Ok(format!("{}{}{}", encoded, SEPARATOR, payload))
}

/// Split an envelope into its header and payload.
///
/// Fails with `Format` when the separator is missing or the header JSON
/// does not parse, and with `Decode` when the header is not valid base64.
/// Callers treating "not an envelope" as a non-error (the pipeline does)
/// map any error here to their sentinel.
pub fn open(input: &str) -> Result<(Header, &str)> {
	let (head, payload) = input.split_once(SEPARATOR).ok_or_else(|| {
		RevencError::Format("missing ':' separator, not a reversible envelope".to_string())
	})?;

	let raw = STANDARD
		.decode(head)
		.map_err(|e| RevencError::Decode(format!("envelope header is not valid base64: {}", e)))?;

	let header: Header = serde_json::from_slice(&raw)
		.map_err(|e| RevencError::Format(format!("envelope header is not valid JSON: {}", e)))?;

	Ok((header, payload))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn config() -> PipelineConfig {
		PipelineConfig::new()
			.with_transform("base64")
			.with_compression(CompressionMethod::Lz)
			.with_metadata("v", Value::from(2))
	}

	#[test]
	fn test_seal_open_round_trip() {
		let sealed = seal(&config(), "payload-bytes").unwrap();
		let (header, payload) = open(&sealed).unwrap();
		assert_eq!(header.transforms, vec!["base64"]);
		assert_eq!(header.compression, CompressionMethod::Lz);
		assert_eq!(header.metadata["v"], 2);
		assert_eq!(payload, "payload-bytes");
	}

	#[test]
	fn test_open_splits_at_first_separator_only() {
		let sealed = seal(&config(), "a:b:c").unwrap();
		let (_, payload) = open(&sealed).unwrap();
		assert_eq!(payload, "a:b:c");
	}

	#[test]
	fn test_open_rejects_missing_separator() {
		assert!(matches!(
			open("no separator here"),
			Err(RevencError::Format(_))
		));
	}

	#[test]
	fn test_open_rejects_bad_base64_header() {
		assert!(matches!(
			open("!!!not-base64!!!:payload"),
			Err(RevencError::Decode(_))
		));
	}

	#[test]
	fn test_open_rejects_non_json_header() {
		let head = STANDARD.encode("just some text");
		assert!(matches!(
			open(&format!("{}:payload", head)),
			Err(RevencError::Format(_))
		));
	}

	#[test]
	fn test_open_accepts_lz77_alias() {
		// Envelope written by the original producer
		let head = STANDARD.encode(r#"{"e":[],"c":"lz77","m":{}}"#);
		let (header, _) = open(&format!("{}:x", head)).unwrap();
		assert_eq!(header.compression, CompressionMethod::Lz);
	}

	#[test]
	fn test_open_defaults_missing_metadata() {
		let head = STANDARD.encode(r#"{"e":["hex"],"c":"none"}"#);
		let (header, _) = open(&format!("{}:x", head)).unwrap();
		assert!(header.metadata.is_empty());
	}

	#[test]
	fn test_header_wire_shape() {
		let sealed = seal(&config(), "").unwrap();
		let head = sealed.split_once(':').unwrap().0;
		let json = String::from_utf8(STANDARD.decode(head).unwrap()).unwrap();
		let value: Value = serde_json::from_str(&json).unwrap();
		assert_eq!(value["e"][0], "base64");
		assert_eq!(value["c"], "lz");
		assert_eq!(value["m"]["v"], 2);
	}
}
