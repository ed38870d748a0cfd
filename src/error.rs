//! Error types for the evaluation library.
//!
//! Degenerate inputs (empty hypotheses, orders longer than the text, zero
//! matches) are scored, not rejected. Only missing session state and bad
//! configuration surface as errors.

use thiserror::Error;

/// All errors the library can return.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum EvalError {
  /// An information value or an evaluation was requested before a reference
  /// corpus was set on the session.
  #[error("no reference corpus configured for this evaluation session")]
  ReferenceNotConfigured,

  #[error("invalid evaluation options: {0}")]
  InvalidOptions(String),

  #[error("failed to parse evaluation options: {0}")]
  OptionsFormat(#[from] serde_json::Error),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, EvalError>;
