//! The `Scorer` trait, which defines the interface for metric plugins.

use crate::context::EvalContext;
use crate::types::{EvalScore, ScorerKind};

/// A trait for metric plugins that score a hypothesis against a reference.
///
/// The `Evaluator` runs every registered scorer over the same context and
/// collects their results into an `EvaluationReport`. Degenerate inputs are
/// expected to produce a defined score (usually zero) rather than a failure,
/// which is why `score` is infallible.
///
/// The `Send` and `Sync` bounds allow scorers to run concurrently when the
/// `parallel` feature is enabled.
pub trait Scorer: Send + Sync {
  /// Returns the `ScorerKind` of this scorer.
  fn kind(&self) -> ScorerKind;

  /// Scores `context.hypothesis` against `context.reference`.
  fn score(&self, context: &EvalContext) -> EvalScore;
}
