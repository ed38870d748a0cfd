//! The reference corpus an evaluation session scores against.

use crate::options::NgramMatching;
use crate::scorers::normalizer::{chunk, normalize, normalize_to_string};
use log::debug;

/// A normalized reference corpus.
///
/// Holds the reference in two shapes: the whole document as one space-joined
/// token stream (used for information-value frequency lookups) and a list of
/// token segments (used for clipped-count matching).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceCorpus {
  stream: String,
  padded: String,
  token_count: usize,
  segments: Vec<Vec<String>>,
}

impl ReferenceCorpus {
  /// Builds a corpus from one raw reference document.
  ///
  /// The document is normalized, re-joined with single spaces and cut into
  /// windows of `chunk_size` characters; each window is tokenized into its
  /// own segment. A word straddling a window edge ends up split across two
  /// segments.
  pub fn from_text(raw: &str, chunk_size: usize) -> Self {
    let stream = normalize_to_string(raw);
    let segments: Vec<Vec<String>> = chunk(&stream, chunk_size)
      .into_iter()
      .map(normalize)
      .collect();

    debug!(
      "Built reference corpus: {} chars, {} segments of up to {} chars",
      stream.chars().count(),
      segments.len(),
      chunk_size
    );

    Self::assemble(stream, segments)
  }

  /// Builds a corpus from already tokenized reference segments.
  ///
  /// The frequency stream is every segment's tokens joined in order.
  pub fn from_segments(segments: Vec<Vec<String>>) -> Self {
    let stream = segments
      .iter()
      .flatten()
      .map(String::as_str)
      .collect::<Vec<_>>()
      .join(" ");
    Self::assemble(stream, segments)
  }

  fn assemble(stream: String, segments: Vec<Vec<String>>) -> Self {
    let token_count = stream.split(' ').filter(|t| !t.is_empty()).count();
    let padded = format!(" {} ", stream);
    Self {
      stream,
      padded,
      token_count,
      segments,
    }
  }

  /// The space-joined token stream.
  pub fn stream(&self) -> &str {
    &self.stream
  }

  /// Number of tokens in the stream.
  pub fn token_count(&self) -> usize {
    self.token_count
  }

  /// The pseudo-reference segments used for clipped counting.
  pub fn segments(&self) -> &[Vec<String>] {
    &self.segments
  }

  pub fn is_empty(&self) -> bool {
    self.token_count == 0
  }

  /// Counts occurrences of a space-joined n-gram in the stream.
  ///
  /// The empty pattern (the prefix of a unigram) is counted in the same unit
  /// as the mode: every character position of the stream (length plus one)
  /// for substring matching, every token for token-boundary matching. Either
  /// way it is at least the count of any non-empty pattern, which keeps
  /// information values non-negative.
  pub fn occurrences(&self, pattern: &str, matching: NgramMatching) -> usize {
    match matching {
      NgramMatching::Substring if pattern.is_empty() => self.stream.chars().count() + 1,
      NgramMatching::TokenBoundary if pattern.is_empty() => self.token_count,
      NgramMatching::Substring => self.stream.matches(pattern).count(),
      NgramMatching::TokenBoundary => {
        let needle = format!(" {} ", pattern);
        let mut count = 0;
        let mut from = 0;
        // Neighbouring matches share a delimiter, so step one byte past the
        // leading space instead of past the whole match.
        while let Some(pos) = self.padded[from..].find(&needle) {
          count += 1;
          from += pos + 1;
        }
        count
      }
    }
  }
}
