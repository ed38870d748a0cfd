//! The scoring pipeline and the built-in `Scorer` implementations.
//!
//! Text flows leaves-first: [`normalizer`] turns raw text into tokens,
//! [`ngram`] counts n-grams, [`precision`] clips hypothesis counts against
//! reference segments, and the scorers combine the results.
//!
//! # Available Scorers
//!
//! - [`ModifiedBleu`](crate::scorers::ModifiedBleu): corpus-level clipped precision combined in log space.
//! - [`NistScore`](crate::scorers::NistScore): information-weighted matches with an optional length penalty.
//!
//! # Example: Registering Scorers
//!
//! ```rust
//! use nlgeval::prelude::*;
//! use nlgeval::scorers::{ModifiedBleu, NistScore};
//!
//! let evaluator = Evaluator::builder()
//!     .with(Box::new(ModifiedBleu::new().with_weights(vec![0.5, 0.5])))
//!     .with(Box::new(NistScore::new().with_max_order(3)))
//!     .reference("the cat sat on the mat")
//!     .build()
//!     .unwrap();
//!
//! let report = evaluator.evaluate("the cat sat").unwrap();
//! assert_eq!(report.scores.len(), 2);
//! ```

/// Text normalization and reference windowing.
pub mod normalizer;
/// N-gram extraction and counting.
pub mod ngram;
/// Clipped n-gram precision.
pub mod precision;
/// Corpus-level modified BLEU.
#[cfg(feature = "bleu")]
pub mod bleu;
/// Information-weighted NIST-style scoring.
#[cfg(feature = "nist")]
pub mod nist;

#[cfg(feature = "bleu")]
pub use bleu::ModifiedBleu;
#[cfg(feature = "nist")]
pub use nist::NistScore;
