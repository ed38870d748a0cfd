//! Core data types for evaluation results.

#[cfg(feature = "bleu")]
use crate::fraction::Fraction;
use serde::{Deserialize, Serialize};

/// An enumeration of the different kinds of scorers available.
///
/// Used to look up a scorer's result in an [`EvaluationReport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScorerKind {
  /// Corpus-level modified BLEU without brevity penalty or smoothing.
  #[cfg(feature = "bleu")]
  Bleu,
  /// NIST-style information-weighted n-gram score.
  #[cfg(feature = "nist")]
  Nist,
  /// A placeholder for custom, user-defined scorers.
  Custom,
}

/// The score one scorer assigned to a hypothesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalScore {
  /// Which scorer produced this score.
  pub kind: ScorerKind,
  /// The scalar metric. Non-negative; for modified BLEU with weights summing
  /// to one it lies in `[0, 1]`.
  pub score: f64,
  /// Scorer-specific breakdown explaining how the score was reached.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub detail: Option<ScoreDetail>,
}

impl EvalScore {
  /// Creates a score without a breakdown.
  pub fn new(kind: ScorerKind, score: f64) -> Self {
    Self {
      kind,
      score,
      detail: None,
    }
  }

  /// Attaches a breakdown to the score.
  pub fn with_detail(mut self, detail: ScoreDetail) -> Self {
    self.detail = Some(detail);
    self
  }
}

/// Scorer-specific metadata behind a score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ScoreDetail {
  /// Breakdown of a modified BLEU score.
  #[cfg(feature = "bleu")]
  Bleu {
    /// Accumulated clipped precision for orders `1..=weights.len()`.
    precisions: Vec<Fraction>,
    /// The weights the precisions were combined with.
    weights: Vec<f64>,
  },
  /// Breakdown of an information-value score.
  #[cfg(feature = "nist")]
  Nist {
    /// Information-weighted match rate for orders `1..=max_order`.
    order_scores: Vec<f64>,
    /// Length penalty multiplier applied to the summed order scores.
    brevity: f64,
  },
}

/// Scores produced by every scorer of an evaluator, in registration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
  pub scores: Vec<EvalScore>,
}

impl EvaluationReport {
  /// The first score produced by a scorer of the given kind.
  pub fn get(&self, kind: ScorerKind) -> Option<&EvalScore> {
    self.scores.iter().find(|s| s.kind == kind)
  }

  /// The scalar score of the first scorer of the given kind.
  pub fn score(&self, kind: ScorerKind) -> Option<f64> {
    self.get(kind).map(|s| s.score)
  }

  /// The score of the first registered scorer.
  pub fn primary(&self) -> Option<f64> {
    self.scores.first().map(|s| s.score)
  }

  pub fn is_empty(&self) -> bool {
    self.scores.is_empty()
  }
}
