use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RevencError>;

#[derive(Error, Debug)]
pub enum RevencError {
	#[error("Decode failed: {0}")]
	Decode(String),

	#[error("Invalid envelope format: {0}")]
	Format(String),

	#[error("Transform '{name}' failed: {reason}")]
	Transform { name: String, reason: String },

	#[error("Configuration error: {0}")]
	Config(String),

	#[error("Header serialization failed: {0}")]
	Json(#[from] serde_json::Error),
}
