//! Configuration for an evaluation session.

use crate::error::{EvalError, Result};
use log::warn;
use serde::{Deserialize, Serialize};

/// How n-gram occurrences are counted in the reference stream when computing
/// information values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NgramMatching {
  /// Non-overlapping substring count over the space-joined reference.
  ///
  /// This is an approximation: `"cat"` is also found inside `"concatenate"`.
  #[default]
  Substring,
  /// Space-delimited, overlapping count. Equivalent to matching exact token
  /// sequences.
  TokenBoundary,
}

/// Options controlling both scoring paths.
///
/// Every field has a default, so a partial JSON document is enough:
///
/// ```rust
/// use nlgeval::prelude::*;
///
/// let options = EvalOptions::from_json(r#"{ "weights": [0.5, 0.5] }"#).unwrap();
/// assert_eq!(options.max_order, 5);
/// assert_eq!(options.reference_chunk_size, 1000);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalOptions {
  /// Per-order weights for modified BLEU. The number of weights is the
  /// highest n-gram order considered.
  #[serde(default = "default_weights")]
  pub weights: Vec<f64>,
  /// Highest n-gram order for the information-value score.
  #[serde(default = "default_max_order")]
  pub max_order: usize,
  /// Brevity factor exponent for the information-value score. Zero disables
  /// the length penalty.
  #[serde(default)]
  pub beta: f64,
  /// Window, in characters, used to cut one long reference document into
  /// pseudo-reference segments.
  #[serde(default = "default_chunk_size")]
  pub reference_chunk_size: usize,
  /// Occurrence counting used by the information-value path.
  #[serde(default)]
  pub ngram_matching: NgramMatching,
}

fn default_weights() -> Vec<f64> {
  vec![0.25; 4]
}

fn default_max_order() -> usize {
  5
}

fn default_chunk_size() -> usize {
  1000
}

impl Default for EvalOptions {
  fn default() -> Self {
    Self {
      weights: default_weights(),
      max_order: default_max_order(),
      beta: 0.0,
      reference_chunk_size: default_chunk_size(),
      ngram_matching: NgramMatching::default(),
    }
  }
}

impl EvalOptions {
  /// Parses options from JSON and validates them.
  pub fn from_json(json: &str) -> Result<Self> {
    let options: Self = serde_json::from_str(json)?;
    options.validate()?;
    Ok(options)
  }

  /// Sets the per-order BLEU weights.
  pub fn weights(mut self, weights: Vec<f64>) -> Self {
    self.weights = weights;
    self
  }

  /// Sets the highest order for the information-value score.
  pub fn max_order(mut self, max_order: usize) -> Self {
    self.max_order = max_order;
    self
  }

  /// Sets the brevity exponent.
  pub fn beta(mut self, beta: f64) -> Self {
    self.beta = beta;
    self
  }

  /// Sets the reference window size.
  pub fn reference_chunk_size(mut self, size: usize) -> Self {
    self.reference_chunk_size = size;
    self
  }

  /// Sets the information-value matching mode.
  pub fn ngram_matching(mut self, matching: NgramMatching) -> Self {
    self.ngram_matching = matching;
    self
  }

  /// Checks that the options describe a usable session.
  ///
  /// Weights that do not sum to one are accepted with a warning.
  pub fn validate(&self) -> Result<()> {
    if self.weights.is_empty() {
      return Err(EvalError::InvalidOptions(
        "at least one n-gram weight is required".to_string(),
      ));
    }
    if let Some(w) = self.weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
      return Err(EvalError::InvalidOptions(format!(
        "weights must be finite and non-negative, got {}",
        w
      )));
    }
    if self.max_order == 0 {
      return Err(EvalError::InvalidOptions(
        "max_order must be at least 1".to_string(),
      ));
    }
    if self.reference_chunk_size == 0 {
      return Err(EvalError::InvalidOptions(
        "reference_chunk_size must be at least 1".to_string(),
      ));
    }
    if !self.beta.is_finite() {
      return Err(EvalError::InvalidOptions(format!(
        "beta must be finite, got {}",
        self.beta
      )));
    }

    let total: f64 = self.weights.iter().sum();
    if (total - 1.0).abs() > 1e-9 {
      warn!("BLEU weights sum to {} rather than 1; scores may exceed 1", total);
    }

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_defaults() {
    let options = EvalOptions::default();
    assert_eq!(options.weights, vec![0.25, 0.25, 0.25, 0.25]);
    assert_eq!(options.max_order, 5);
    assert_eq!(options.beta, 0.0);
    assert_eq!(options.reference_chunk_size, 1000);
    assert_eq!(options.ngram_matching, NgramMatching::Substring);
    assert!(options.validate().is_ok());
  }

  #[test]
  fn test_setters() {
    let options = EvalOptions::default()
      .weights(vec![1.0])
      .max_order(3)
      .beta(-0.5)
      .reference_chunk_size(10)
      .ngram_matching(NgramMatching::TokenBoundary);
    assert_eq!(options.weights, vec![1.0]);
    assert_eq!(options.max_order, 3);
    assert_eq!(options.beta, -0.5);
    assert_eq!(options.reference_chunk_size, 10);
    assert_eq!(options.ngram_matching, NgramMatching::TokenBoundary);
  }

  #[test]
  fn test_validate_rejects() {
    let bad = [
      EvalOptions::default().weights(vec![]),
      EvalOptions::default().weights(vec![0.5, -0.5]),
      EvalOptions::default().weights(vec![f64::NAN]),
      EvalOptions::default().max_order(0),
      EvalOptions::default().reference_chunk_size(0),
      EvalOptions::default().beta(f64::INFINITY),
    ];
    for options in bad {
      assert!(matches!(options.validate(), Err(EvalError::InvalidOptions(_))));
    }
  }

  #[test]
  fn test_unnormalized_weights_are_allowed() {
    assert!(EvalOptions::default().weights(vec![1.0, 1.0]).validate().is_ok());
  }
}
