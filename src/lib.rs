//! # revenc — self-describing reversible encoding pipeline
//!
//! A small library for transforming strings through a chain of named,
//! reversible text transforms plus an optional from-scratch compressor,
//! with an envelope header that makes the whole operation reversible
//! without the caller remembering what was applied.
//!
//! ## Features
//!
//! - **Two compression codecs**: a windowed LZ-style back-reference
//!   compressor and an adaptive LZW-style dictionary compressor, both
//!   self-contained and base64-armored for text transport
//! - **Composable pipeline**: chain any number of named transforms with a
//!   compressor via a fluent builder
//! - **Self-describing output**: a reversible pipeline prefixes a compact
//!   header recording exactly what it did, so `reverse` needs no state
//! - **Fail-soft decoding**: malformed payloads degrade to the untouched
//!   input via an explicit [`Recovered::Fallback`], never a panic
//!
//! ## Quick start
//!
//! ### Round-tripping through a pipeline
//!
//! ```rust
//! use revenc::{CompressionMethod, Pipeline};
//!
//! let mut pipeline = Pipeline::new();
//! pipeline
//!     .add_transform("base64")
//!     .set_compression(CompressionMethod::Lz)
//!     .enable_reversibility();
//!
//! let processed = pipeline.process("hello world").unwrap();
//!
//! // Any pipeline instance can reverse it; the envelope carries the config
//! let restored = Pipeline::new().reverse(&processed).unwrap();
//! assert_eq!(restored.as_deref(), Some("hello world"));
//! ```
//!
//! ### Using a codec directly
//!
//! ```rust
//! use revenc::{compress, decompress, CompressionMethod};
//!
//! let compressed = compress("aaaaaaaaaa", CompressionMethod::Lz);
//! assert!(compressed.len() < 10);
//!
//! let restored = decompress(&compressed, CompressionMethod::Lz);
//! assert!(!restored.is_fallback());
//! assert_eq!(restored.into_inner(), "aaaaaaaaaa");
//! ```
//!
//! ### Detecting the fallback path
//!
//! ```rust
//! use revenc::{decompress, CompressionMethod};
//!
//! // Not a valid compressed payload: the input comes back unchanged,
//! // flagged as a fallback rather than a successful decode
//! let result = decompress("??", CompressionMethod::Dictionary);
//! assert!(result.is_fallback());
//! assert_eq!(result.into_inner(), "??");
//! ```

pub mod codec;
pub mod config;
pub mod envelope;
pub mod error;
pub mod pipeline;
pub mod transform;

// Re-export commonly used types for convenience
pub use codec::{compress, decompress, Recovered};
pub use config::{CompressionMethod, PipelineConfig};
pub use error::{Result, RevencError};
pub use pipeline::Pipeline;
pub use transform::{BasicTransforms, EncodedStep, MultiEncodeResult, TransformService};

/// The crate version, set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
