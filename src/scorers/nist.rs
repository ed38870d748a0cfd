//! NIST-style information-weighted n-gram scoring.
//!
//! Each hypothesis n-gram that also occurs in the reference earns its
//! information value (see [`crate::information`]) instead of a flat count, so
//! matching rare phrasing is worth more than matching common filler. For each
//! order the weighted matches are divided by the number of hypothesis n-grams;
//! the per-order rates are summed and scaled by a brevity factor.

use crate::context::EvalContext;
use crate::scorer::Scorer;
use crate::scorers::ngram::count_ngrams;
use crate::types::{EvalScore, ScoreDetail, ScorerKind};
use log::debug;

/// Length penalty `exp(beta * log2(min(1, hyp_len / ref_len))^2)`.
///
/// Returns 1 when `beta` is zero or the reference is empty. An empty
/// hypothesis gets 0 under any non-zero `beta`.
pub fn brevity_factor(hypothesis_len: usize, reference_len: usize, beta: f64) -> f64 {
  if beta == 0.0 || reference_len == 0 {
    return 1.0;
  }
  if hypothesis_len == 0 {
    return 0.0;
  }

  let ratio = (hypothesis_len as f64 / reference_len as f64).min(1.0);
  let log_ratio = ratio.log2();
  (beta * log_ratio * log_ratio).exp()
}

/// Information-weighted match rate for n-gram order `n`.
///
/// A hypothesis n-gram seen `c` times is credited `min(c, occurrences in the
/// reference)` times its information value. Zero when the hypothesis has no
/// n-grams of this order.
pub fn order_score(context: &EvalContext, n: usize) -> f64 {
  let counts = count_ngrams(context.hypothesis, n);
  let total: usize = counts.values().sum();
  if total == 0 {
    return 0.0;
  }

  let matching = context.options.ngram_matching;
  let weighted: f64 = counts
    .iter()
    .filter_map(|(ngram, count)| {
      let found = context.reference.occurrences(&ngram.join(" "), matching);
      let matched = (*count).min(found);
      (matched > 0).then(|| matched as f64 * context.info_value(ngram))
    })
    .sum();

  weighted / total as f64
}

/// A `Scorer` computing the information-weighted score against the session's
/// reference stream.
///
/// Uses the session's `max_order` and `beta` unless overridden.
#[derive(Debug, Clone, Default)]
pub struct NistScore {
  max_order: Option<usize>,
  beta: Option<f64>,
}

impl NistScore {
  /// Creates a scorer that follows the session options.
  pub fn new() -> Self {
    Self::default()
  }

  /// Overrides the highest n-gram order.
  pub fn with_max_order(mut self, max_order: usize) -> Self {
    self.max_order = Some(max_order);
    self
  }

  /// Overrides the brevity exponent.
  pub fn with_beta(mut self, beta: f64) -> Self {
    self.beta = Some(beta);
    self
  }
}

impl Scorer for NistScore {
  fn kind(&self) -> ScorerKind {
    ScorerKind::Nist
  }

  fn score(&self, context: &EvalContext) -> EvalScore {
    let max_order = self.max_order.unwrap_or(context.options.max_order);
    let beta = self.beta.unwrap_or(context.options.beta);

    let order_scores: Vec<f64> = (1..=max_order).map(|n| order_score(context, n)).collect();
    let brevity = brevity_factor(
      context.hypothesis.len(),
      context.reference.token_count(),
      beta,
    );
    let score = order_scores.iter().sum::<f64>() * brevity;

    debug!(
      "NIST score up to order {}: {} (brevity {})",
      max_order, score, brevity
    );

    EvalScore::new(ScorerKind::Nist, score).with_detail(ScoreDetail::Nist {
      order_scores,
      brevity,
    })
  }
}
