//! Corpus-level modified BLEU.
//!
//! Differs from textbook BLEU in two deliberate ways:
//!
//! - No brevity penalty. Generated text is judged on overlap only; its length
//!   relative to the reference is ignored.
//! - No smoothing. An order with zero clipped matches is left out of the
//!   weighted log sum instead of zeroing the whole score, so higher-order
//!   misses do not wipe out a hypothesis that has unigram support. A
//!   hypothesis with no unigram matches at all scores exactly zero.

use crate::context::EvalContext;
use crate::fraction::Fraction;
use crate::scorer::Scorer;
use crate::scorers::precision::modified_precision;
use crate::types::{EvalScore, ScoreDetail, ScorerKind};
use log::debug;

/// Running per-order precision totals across any number of hypotheses.
///
/// Numerators and denominators are summed before dividing, which gives the
/// micro-averaged (corpus-level) precision rather than a mean of
/// per-hypothesis ratios.
///
/// ```rust
/// use nlgeval::scorers::bleu::CorpusBleu;
///
/// let refs = vec![vec!["the".to_string(), "cat".to_string()]];
/// let mut corpus = CorpusBleu::new(vec![1.0]);
/// corpus.add(&refs, &["the".to_string(), "dog".to_string()]);
/// corpus.add(&refs, &["the".to_string(), "cat".to_string()]);
/// assert!((corpus.score() - 0.75).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct CorpusBleu {
  weights: Vec<f64>,
  numerators: Vec<u64>,
  denominators: Vec<u64>,
}

impl CorpusBleu {
  /// Creates an empty accumulator; one n-gram order per weight.
  pub fn new(weights: Vec<f64>) -> Self {
    let orders = weights.len();
    Self {
      weights,
      numerators: vec![0; orders],
      denominators: vec![0; orders],
    }
  }

  /// Adds one hypothesis and its reference segments to the totals.
  pub fn add(&mut self, references: &[Vec<String>], hypothesis: &[String]) {
    for order in 0..self.weights.len() {
      let precision = modified_precision(references, hypothesis, order + 1);
      self.numerators[order] = self.numerators[order].saturating_add(precision.numerator());
      self.denominators[order] = self.denominators[order].saturating_add(precision.denominator());
    }
  }

  /// Accumulated precision per order, starting at unigrams.
  pub fn precisions(&self) -> Vec<Fraction> {
    self
      .numerators
      .iter()
      .zip(&self.denominators)
      .map(|(numerator, denominator)| Fraction::new(*numerator, *denominator))
      .collect()
  }

  pub fn weights(&self) -> &[f64] {
    &self.weights
  }

  /// Combines the accumulated precisions into one score.
  ///
  /// `exp(sum(w_i * ln(p_i)))` over the orders whose numerator is non-zero;
  /// exactly zero when there is no unigram match.
  pub fn score(&self) -> f64 {
    match self.numerators.first() {
      Some(unigrams) if *unigrams > 0 => {}
      _ => return 0.0,
    }

    let log_sum: f64 = self
      .weights
      .iter()
      .zip(self.precisions())
      .filter_map(|(weight, precision)| precision.ln().map(|ln| weight * ln))
      .sum();

    log_sum.exp()
  }
}

/// Modified BLEU of one hypothesis against its reference segments.
pub fn modified_bleu(references: &[Vec<String>], hypothesis: &[String], weights: &[f64]) -> f64 {
  let mut corpus = CorpusBleu::new(weights.to_vec());
  corpus.add(references, hypothesis);
  corpus.score()
}

/// A `Scorer` computing modified BLEU against the session's reference
/// segments.
///
/// Uses the session's weights unless constructed with its own.
#[derive(Debug, Clone, Default)]
pub struct ModifiedBleu {
  weights: Option<Vec<f64>>,
}

impl ModifiedBleu {
  /// Creates a scorer that follows the session options.
  pub fn new() -> Self {
    Self::default()
  }

  /// Overrides the per-order weights for this scorer only.
  pub fn with_weights(mut self, weights: Vec<f64>) -> Self {
    self.weights = Some(weights);
    self
  }
}

impl Scorer for ModifiedBleu {
  fn kind(&self) -> ScorerKind {
    ScorerKind::Bleu
  }

  fn score(&self, context: &EvalContext) -> EvalScore {
    let weights = self
      .weights
      .clone()
      .unwrap_or_else(|| context.options.weights.clone());

    let mut corpus = CorpusBleu::new(weights);
    corpus.add(context.reference.segments(), context.hypothesis);
    let score = corpus.score();
    let precisions = corpus.precisions();

    debug!(
      "Modified BLEU over {} segments: {} (precisions {:?})",
      context.reference.segments().len(),
      score,
      precisions.iter().map(|p| p.to_string()).collect::<Vec<_>>()
    );

    EvalScore::new(ScorerKind::Bleu, score).with_detail(ScoreDetail::Bleu {
      precisions,
      weights: corpus.weights().to_vec(),
    })
  }
}
