//! The pipeline: named transforms, then compression, then (optionally)
//! the self-describing envelope.
//!
//! A `Pipeline` is configured once through its chaining builder methods
//! and then used read-only; `process` and `reverse` are pure functions of
//! (configuration, input). Sharing a configured pipeline across threads is
//! safe — only the builder methods take `&mut self`.

use crate::codec;
use crate::config::{CompressionMethod, PipelineConfig};
use crate::envelope;
use crate::error::{Result, RevencError};
use crate::transform::{BasicTransforms, TransformService};
use serde_json::Value;

pub struct Pipeline<S = BasicTransforms> {
	service: S,
	config: PipelineConfig,
}

impl Pipeline<BasicTransforms> {
	/// A pipeline backed by the built-in transform set.
	pub fn new() -> Self {
		Self::with_service(BasicTransforms::new())
	}
}

impl Default for Pipeline<BasicTransforms> {
	fn default() -> Self {
		Self::new()
	}
}

impl<S: TransformService> Pipeline<S> {
	/// A pipeline backed by a caller-provided transform service.
	pub fn with_service(service: S) -> Self {
		Self {
			service,
			config: PipelineConfig::new(),
		}
	}

	/// Append one transform to the forward sequence.
	pub fn add_transform(&mut self, name: impl Into<String>) -> &mut Self {
		self.config.transforms.push(name.into());
		self
	}

	/// Append several transforms, preserving their order.
	pub fn add_transforms<I>(&mut self, names: I) -> &mut Self
	where
		I: IntoIterator,
		I::Item: Into<String>,
	{
		self.config
			.transforms
			.extend(names.into_iter().map(Into::into));
		self
	}

	pub fn set_compression(&mut self, method: CompressionMethod) -> &mut Self {
		self.config.compression = method;
		self
	}

	pub fn enable_reversibility(&mut self) -> &mut Self {
		self.config.reversible = true;
		self
	}

	pub fn disable_reversibility(&mut self) -> &mut Self {
		self.config.reversible = false;
		self
	}

	/// Attach caller bookkeeping to the configuration. Recorded in the
	/// envelope header verbatim, never interpreted.
	pub fn add_metadata(&mut self, key: impl Into<String>, value: Value) -> &mut Self {
		self.config.metadata.insert(key.into(), value);
		self
	}

	pub fn config(&self) -> &PipelineConfig {
		&self.config
	}

	/// Run `input` forward through the pipeline.
	///
	/// Transforms apply in configured order (the service's final
	/// intermediate is taken), then the compressor, then the envelope
	/// prefix when reversibility is enabled. Only transform-service
	/// failures can surface as errors.
	pub fn process(&self, input: &str) -> Result<String> {
		let mut result = input.to_string();

		if !self.config.transforms.is_empty() {
			let encoded = self.service.encode_multiple(&result, &self.config.transforms)?;
			result = encoded
				.final_output()
				.ok_or_else(|| RevencError::Transform {
					name: self.config.transforms.join(","),
					reason: "transform service returned no results".to_string(),
				})?
				.to_string();
		}

		if self.config.compression != CompressionMethod::None {
			result = codec::compress(&result, self.config.compression);
		}

		if self.config.reversible {
			result = envelope::seal(&self.config, &result)?;
		}

		Ok(result)
	}

	/// Undo a reversible `process` using only the envelope header.
	///
	/// Returns `Ok(None)` when `output` is not one of our envelopes (no
	/// separator, or a header that fails base64/JSON parsing) — that is a
	/// sentinel, not an error. A payload that fails decompression degrades
	/// to the untouched payload (logged); transform decode failures
	/// propagate as errors.
	pub fn reverse(&self, output: &str) -> Result<Option<String>> {
		let (header, payload) = match envelope::open(output) {
			Ok(parts) => parts,
			Err(err) => {
				log::debug!("input is not a reversible envelope: {}", err);
				return Ok(None);
			}
		};

		let mut result = payload.to_string();

		if header.compression != CompressionMethod::None {
			result = codec::decompress(&result, header.compression).into_inner();
		}

		for name in header.transforms.iter().rev() {
			result = self.service.decode(&result, name)?;
		}

		Ok(Some(result))
	}
}
