//! The evaluation session that owns a reference corpus and runs scorers.

use crate::context::EvalContext;
use crate::error::{EvalError, Result};
use crate::information::{information_value, InfoCache};
use crate::options::EvalOptions;
use crate::reference::ReferenceCorpus;
use crate::scorer::Scorer;
use crate::scorers::normalizer::normalize;
use crate::types::{EvaluationReport, ScorerKind};
use log::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// One evaluation session.
///
/// An `Evaluator` owns its options, the reference corpus and the
/// information-value cache filled from that corpus. Replacing the reference
/// also resets the cache, and separate evaluators never share either, so
/// several sessions with different references can run side by side.
///
/// Create an `Evaluator` using the [`EvaluatorBuilder`] or [`Evaluator::new`].
///
/// # Examples
///
/// ```rust
/// use nlgeval::prelude::*;
///
/// let mut evaluator = Evaluator::new(EvalOptions::default().weights(vec![1.0])).unwrap();
/// assert!(evaluator.evaluate("anything").is_err());
///
/// evaluator.set_reference("The cat sat");
/// let report = evaluator.evaluate("the dog ran").unwrap();
/// let bleu = report.score(ScorerKind::Bleu).unwrap();
/// assert!((bleu - 1.0 / 3.0).abs() < 1e-12);
/// ```
pub struct Evaluator {
  /// The registered scorer plugins, run in order.
  scorers: Vec<Box<dyn Scorer>>,
  options: EvalOptions,
  reference: Option<ReferenceCorpus>,
  cache: InfoCache,
}

impl Evaluator {
  /// Creates a new `EvaluatorBuilder`.
  pub fn builder() -> EvaluatorBuilder {
    EvaluatorBuilder::new()
  }

  /// Creates a session with the built-in scorers and no reference.
  pub fn new(options: EvalOptions) -> Result<Self> {
    Self::builder().options(options).build()
  }

  pub fn options(&self) -> &EvalOptions {
    &self.options
  }

  /// Kinds of the registered scorers, in run order.
  pub fn scorer_kinds(&self) -> Vec<ScorerKind> {
    self.scorers.iter().map(|s| s.kind()).collect()
  }

  /// Sets the reference from one raw document, chunked by the session's
  /// `reference_chunk_size`.
  pub fn set_reference(&mut self, text: &str) {
    let corpus = ReferenceCorpus::from_text(text, self.options.reference_chunk_size);
    self.set_reference_corpus(corpus);
  }

  /// Sets an already built reference corpus.
  pub fn set_reference_corpus(&mut self, corpus: ReferenceCorpus) {
    debug!(
      "Reference set: {} tokens in {} segments; clearing {} cached information values",
      corpus.token_count(),
      corpus.segments().len(),
      self.cache.len()
    );
    self.cache.clear();
    self.reference = Some(corpus);
  }

  /// Drops the reference and its cached values.
  pub fn clear_reference(&mut self) {
    self.cache.clear();
    self.reference = None;
  }

  pub fn reference(&self) -> Option<&ReferenceCorpus> {
    self.reference.as_ref()
  }

  /// Number of memoized information values.
  pub fn cached_values(&self) -> usize {
    self.cache.len()
  }

  /// Information value of an n-gram against the session reference.
  ///
  /// Fails with [`EvalError::ReferenceNotConfigured`] before a reference has
  /// been set.
  pub fn info_value(&self, ngram: &[String]) -> Result<f64> {
    let reference = self.reference.as_ref().ok_or(EvalError::ReferenceNotConfigured)?;
    Ok(information_value(
      reference,
      &self.cache,
      ngram,
      self.options.ngram_matching,
    ))
  }

  /// Normalizes a raw hypothesis text and scores it with every scorer.
  pub fn evaluate(&self, hypothesis: &str) -> Result<EvaluationReport> {
    let tokens = normalize(hypothesis);
    self.evaluate_tokens(&tokens)
  }

  /// Scores an already normalized hypothesis with every scorer.
  pub fn evaluate_tokens(&self, hypothesis: &[String]) -> Result<EvaluationReport> {
    let reference = self.reference.as_ref().ok_or(EvalError::ReferenceNotConfigured)?;
    let context = EvalContext::new(hypothesis, reference, &self.options, &self.cache);

    debug!(
      "Evaluating {} hypothesis tokens with {} scorers",
      hypothesis.len(),
      self.scorers.len()
    );

    #[cfg(feature = "parallel")]
    let scores = self
      .scorers
      .par_iter()
      .map(|scorer| scorer.score(&context))
      .collect();

    #[cfg(not(feature = "parallel"))]
    let scores = self
      .scorers
      .iter()
      .map(|scorer| scorer.score(&context))
      .collect();

    Ok(EvaluationReport { scores })
  }
}

/// A builder for creating `Evaluator` instances.
///
/// When no scorer is registered, the built-in scorers of the enabled features
/// are used: modified BLEU first, then the NIST-style score.
#[derive(Default)]
pub struct EvaluatorBuilder {
  scorers: Vec<Box<dyn Scorer>>,
  options: Option<EvalOptions>,
  reference: Option<String>,
}

impl EvaluatorBuilder {
  /// Creates a new, empty `EvaluatorBuilder`.
  pub fn new() -> Self {
    Self::default()
  }

  /// Adds a scorer plugin.
  pub fn with(mut self, scorer: Box<dyn Scorer>) -> Self {
    self.scorers.push(scorer);
    self
  }

  /// Sets the session options. Defaults to `EvalOptions::default()`.
  pub fn options(mut self, options: EvalOptions) -> Self {
    self.options = Some(options);
    self
  }

  /// Sets the raw reference document.
  pub fn reference(mut self, text: impl Into<String>) -> Self {
    self.reference = Some(text.into());
    self
  }

  /// Validates the options and builds the `Evaluator`.
  pub fn build(self) -> Result<Evaluator> {
    let options = self.options.unwrap_or_default();
    options.validate()?;

    let scorers = if self.scorers.is_empty() {
      default_scorers()
    } else {
      self.scorers
    };

    let mut evaluator = Evaluator {
      scorers,
      options,
      reference: None,
      cache: InfoCache::new(),
    };
    if let Some(text) = self.reference {
      evaluator.set_reference(&text);
    }

    Ok(evaluator)
  }
}

#[allow(unused_mut)]
fn default_scorers() -> Vec<Box<dyn Scorer>> {
  let mut scorers: Vec<Box<dyn Scorer>> = Vec::new();
  #[cfg(feature = "bleu")]
  scorers.push(Box::new(crate::scorers::ModifiedBleu::new()));
  #[cfg(feature = "nist")]
  scorers.push(Box::new(crate::scorers::NistScore::new()));
  scorers
}

/// Scores one hypothesis text against one raw reference document with
/// modified BLEU.
///
/// A one-shot session: the reference is normalized and chunked by
/// `options.reference_chunk_size`, and the hypothesis is normalized.
#[cfg(feature = "bleu")]
pub fn evaluate_nlg(hypothesis: &str, reference: &str, options: &EvalOptions) -> Result<f64> {
  let evaluator = Evaluator::builder()
    .with(Box::new(crate::scorers::ModifiedBleu::new()))
    .options(options.clone())
    .reference(reference)
    .build()?;

  let report = evaluator.evaluate(hypothesis)?;
  Ok(report.score(ScorerKind::Bleu).unwrap_or(0.0))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::EvalScore;

  struct LengthScorer;

  impl Scorer for LengthScorer {
    fn kind(&self) -> ScorerKind {
      ScorerKind::Custom
    }

    fn score(&self, context: &EvalContext) -> EvalScore {
      EvalScore::new(ScorerKind::Custom, context.hypothesis.len() as f64)
    }
  }

  fn tokens(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
  }

  #[test]
  fn test_requires_reference() {
    let evaluator = Evaluator::new(EvalOptions::default()).unwrap();
    assert!(matches!(
      evaluator.evaluate("hello"),
      Err(EvalError::ReferenceNotConfigured)
    ));
    assert!(matches!(
      evaluator.info_value(&tokens("hello")),
      Err(EvalError::ReferenceNotConfigured)
    ));
  }

  #[test]
  fn test_invalid_options_rejected() {
    let result = Evaluator::new(EvalOptions::default().weights(vec![]));
    assert!(matches!(result, Err(EvalError::InvalidOptions(_))));
  }

  #[test]
  fn test_custom_scorer_replaces_defaults() {
    let evaluator = Evaluator::builder()
      .with(Box::new(LengthScorer))
      .reference("anything")
      .build()
      .unwrap();
    assert_eq!(evaluator.scorer_kinds(), vec![ScorerKind::Custom]);

    let report = evaluator.evaluate("one two three").unwrap();
    assert_eq!(report.primary(), Some(3.0));
  }

  #[test]
  fn test_reset_clears_cache() {
    let mut evaluator = Evaluator::builder().reference("a b c").build().unwrap();
    evaluator.info_value(&tokens("a")).unwrap();
    evaluator.info_value(&tokens("a b")).unwrap();
    assert_eq!(evaluator.cached_values(), 2);

    evaluator.set_reference("x y");
    assert_eq!(evaluator.cached_values(), 0);

    evaluator.clear_reference();
    assert!(evaluator.reference().is_none());
    assert!(evaluator.info_value(&tokens("a")).is_err());
  }
}
