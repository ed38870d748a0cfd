//! nlgeval - Corpus-level n-gram overlap metrics for generated text.
//!
//! Scores a generated (hypothesis) text against a reference corpus with a
//! modified BLEU metric and, optionally, a NIST-style information-weighted
//! metric. Reference state lives in an [`Evaluator`](crate::engine::Evaluator)
//! session, so independent evaluations never share caches.
//!
//! ```rust
//! use nlgeval::prelude::*;
//!
//! let score = evaluate_nlg("The cat sat.", "the cat sat. the dog ran.", &EvalOptions::default()).unwrap();
//! assert!(score > 0.0 && score <= 1.0);
//! ```

pub mod context;
pub mod engine;
pub mod error;
pub mod fraction;
pub mod information;
pub mod options;
pub mod reference;
pub mod scorer;
pub mod scorers;
pub mod types;

pub mod prelude {
  //! Convenient re-exports for common types and traits.

  pub use crate::context::*;
  pub use crate::engine::*;
  pub use crate::error::EvalError;
  pub use crate::fraction::*;
  pub use crate::information::*;
  pub use crate::options::*;
  pub use crate::reference::*;
  pub use crate::scorer::*;
  pub use crate::scorers::normalizer::normalize;
  pub use crate::scorers::ngram::count_ngrams;
  pub use crate::scorers::precision::modified_precision;
  pub use crate::types::*;

  #[cfg(feature = "bleu")]
  pub use crate::scorers::bleu::{modified_bleu, CorpusBleu, ModifiedBleu};
  #[cfg(feature = "nist")]
  pub use crate::scorers::nist::NistScore;
}
