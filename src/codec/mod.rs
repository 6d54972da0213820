//! String-level compression API over the byte codecs.
//!
//! [`lz`] and [`dictionary`] work on raw byte slices. This module wraps
//! them for text: input strings are compressed as their UTF-8 bytes and the
//! token stream is base64-armored so the result stays printable. Decoding
//! failures never surface as errors here — per the documented contract they
//! degrade to handing back the input untouched, made explicit by the
//! [`Recovered`] type.

pub mod dictionary;
pub mod lz;

use crate::config::CompressionMethod;
use crate::error::{Result, RevencError};
use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Outcome of a string-level decompression attempt.
///
/// A `Fallback` carries the caller's input unchanged. Callers that need to
/// distinguish a genuine decode from the degrade path must check the
/// variant; the payload alone does not tell them apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recovered {
    /// The payload decoded successfully.
    Ok(String),
    /// Decoding failed; the original input is returned untouched.
    Fallback(String),
}

impl Recovered {
    pub fn into_inner(self) -> String {
        match self {
            Recovered::Ok(s) | Recovered::Fallback(s) => s,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Recovered::Fallback(_))
    }
}

/// Compress `input` with the given method and base64-armor the result.
///
/// `CompressionMethod::None` is a pass-through. Empty input maps to empty
/// output for every method.
pub fn compress(input: &str, method: CompressionMethod) -> String {
    if input.is_empty() {
        return String::new();
    }
    match method {
        CompressionMethod::None => input.to_string(),
        CompressionMethod::Lz => STANDARD.encode(lz::encode(input.as_bytes())),
        CompressionMethod::Dictionary => STANDARD.encode(dictionary::encode(input.as_bytes())),
    }
}

/// Undo [`compress`]. Failures (malformed base64, malformed token stream,
/// non-UTF-8 output) are logged and degrade to `Recovered::Fallback` with
/// the input unchanged.
pub fn decompress(input: &str, method: CompressionMethod) -> Recovered {
    if input.is_empty() {
        return Recovered::Ok(String::new());
    }
    let decoder: fn(&[u8]) -> Result<Vec<u8>> = match method {
        CompressionMethod::None => return Recovered::Ok(input.to_string()),
        CompressionMethod::Lz => lz::decode,
        CompressionMethod::Dictionary => dictionary::decode,
    };

    match try_decompress(input, decoder) {
        Ok(restored) => Recovered::Ok(restored),
        Err(err) => {
            log::warn!(
                "decompression ({:?}) failed, returning input unchanged: {}",
                method,
                err
            );
            Recovered::Fallback(input.to_string())
        }
    }
}

fn try_decompress(input: &str, decoder: fn(&[u8]) -> Result<Vec<u8>>) -> Result<String> {
    let raw = STANDARD
        .decode(input)
        .map_err(|e| RevencError::Decode(format!("payload is not valid base64: {}", e)))?;

    let bytes = decoder(&raw)?;

    String::from_utf8(bytes)
        .map_err(|e| RevencError::Decode(format!("decompressed bytes are not UTF-8: {}", e)))
}
