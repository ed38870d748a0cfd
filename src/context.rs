//! Context provided to scorers during an evaluation.

use crate::information::{information_value, InfoCache};
use crate::options::EvalOptions;
use crate::reference::ReferenceCorpus;

/// Everything a scorer may read while scoring one hypothesis.
///
/// The reference and the information-value cache belong to the evaluator
/// that built the context, so scorers never see another session's state.
pub struct EvalContext<'a> {
  /// The normalized hypothesis tokens.
  pub hypothesis: &'a [String],
  /// The session's reference corpus.
  pub reference: &'a ReferenceCorpus,
  /// The session's options.
  pub options: &'a EvalOptions,
  cache: &'a InfoCache,
}

impl<'a> EvalContext<'a> {
  /// Creates a context over the given session state.
  pub fn new(
    hypothesis: &'a [String],
    reference: &'a ReferenceCorpus,
    options: &'a EvalOptions,
    cache: &'a InfoCache,
  ) -> Self {
    Self {
      hypothesis,
      reference,
      options,
      cache,
    }
  }

  /// Information value of an n-gram, memoized in the session cache.
  pub fn info_value(&self, ngram: &[String]) -> f64 {
    information_value(self.reference, self.cache, ngram, self.options.ngram_matching)
  }
}
