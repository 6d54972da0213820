//! The text-transform collaborator boundary.
//!
//! Transforms are named, externally-provided reversible string encodings.
//! The pipeline treats them as opaque: it only needs `encode_multiple` for
//! the forward pass and `decode` (applied once per name, in reverse order)
//! for the backward pass. [`BasicTransforms`] is a small built-in service
//! covering the common names so the crate works stand-alone; callers with
//! richer needs implement [`TransformService`] themselves.

use crate::error::{Result, RevencError};
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine as _;

/// One step's output within a multi-transform encode.
#[derive(Debug, Clone)]
pub struct EncodedStep {
    pub transform: String,
    pub encoded: String,
}

/// Ordered per-step results of [`TransformService::encode_multiple`].
/// The pipeline only consumes the final step.
#[derive(Debug, Clone, Default)]
pub struct MultiEncodeResult {
    pub results: Vec<EncodedStep>,
}

impl MultiEncodeResult {
    /// The last intermediate result, i.e. the fully transformed string.
    pub fn final_output(&self) -> Option<&str> {
        self.results.last().map(|step| step.encoded.as_str())
    }
}

/// External collaborator applying named reversible string encodings.
///
/// Both operations are expected to be total and side-effect-free; errors
/// they return propagate through the pipeline uncaught.
pub trait TransformService {
    /// Apply `transforms` left to right, reporting every intermediate.
    fn encode_multiple(&self, input: &str, transforms: &[String]) -> Result<MultiEncodeResult>;

    /// Undo a single named transform.
    fn decode(&self, input: &str, transform: &str) -> Result<String>;
}

/// Built-in service understanding `base64`, `urlSafeBase64`, `hex`,
/// `rot13` and `percentEncoding`. Names follow the identifiers recorded
/// in envelope headers.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicTransforms;

impl BasicTransforms {
    pub fn new() -> Self {
        Self
    }

    fn encode_one(&self, input: &str, transform: &str) -> Result<String> {
        match transform {
            "base64" => Ok(STANDARD.encode(input.as_bytes())),
            "urlSafeBase64" => Ok(URL_SAFE_NO_PAD.encode(input.as_bytes())),
            "hex" => Ok(hex::encode(input.as_bytes())),
            "rot13" => Ok(rot13(input)),
            "percentEncoding" => Ok(percent_encode(input)),
            other => Err(unknown(other)),
        }
    }
}

impl TransformService for BasicTransforms {
    fn encode_multiple(&self, input: &str, transforms: &[String]) -> Result<MultiEncodeResult> {
        let mut result = MultiEncodeResult::default();
        let mut current = input.to_string();

        for name in transforms {
            current = self.encode_one(&current, name)?;
            result.results.push(EncodedStep {
                transform: name.clone(),
                encoded: current.clone(),
            });
        }

        Ok(result)
    }

    fn decode(&self, input: &str, transform: &str) -> Result<String> {
        match transform {
            "base64" => {
                let raw = STANDARD
                    .decode(input)
                    .map_err(|e| failed(transform, e.to_string()))?;
                utf8(transform, raw)
            }
            "urlSafeBase64" => {
                let raw = URL_SAFE_NO_PAD
                    .decode(input)
                    .map_err(|e| failed(transform, e.to_string()))?;
                utf8(transform, raw)
            }
            "hex" => {
                let raw = hex::decode(input).map_err(|e| failed(transform, e.to_string()))?;
                utf8(transform, raw)
            }
            // rot13 is its own inverse
            "rot13" => Ok(rot13(input)),
            "percentEncoding" => percent_decode(input),
            other => Err(unknown(other)),
        }
    }
}

fn unknown(name: &str) -> RevencError {
    RevencError::Transform {
        name: name.to_string(),
        reason: "unknown transform".to_string(),
    }
}

fn failed(name: &str, reason: String) -> RevencError {
    RevencError::Transform {
        name: name.to_string(),
        reason,
    }
}

fn utf8(name: &str, bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| failed(name, format!("decoded bytes are not UTF-8: {}", e)))
}

fn rot13(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            'a'..='z' => (((c as u8 - b'a' + 13) % 26) + b'a') as char,
            'A'..='Z' => (((c as u8 - b'A' + 13) % 26) + b'A') as char,
            other => other,
        })
        .collect()
}

/// RFC 3986 unreserved characters pass through; every other byte becomes
/// an uppercase %XX escape.
fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for &byte in input.as_bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char)
            }
            other => out.push_str(&format!("%{:02X}", other)),
        }
    }
    out
}

fn percent_decode(input: &str) -> Result<String> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' {
            if i + 2 >= bytes.len() {
                return Err(failed("percentEncoding", "truncated %-escape".to_string()));
            }
            let pair = std::str::from_utf8(&bytes[i + 1..i + 3])
                .map_err(|_| failed("percentEncoding", "malformed %-escape".to_string()))?;
            let value = u8::from_str_radix(pair, 16)
                .map_err(|_| failed("percentEncoding", format!("bad hex digits '{}'", pair)))?;
            out.push(value);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }

    utf8("percentEncoding", out)
}
