//! N-gram extraction and counting.

use std::collections::HashMap;

/// An n-gram borrowed from the token sequence it was cut from.
///
/// Equality is positional, so `["a", "b"]` and `["b", "a"]` are distinct.
pub type NGram<'a> = &'a [String];

/// Occurrence counts for every n-gram of one order in one token sequence.
pub type NGramCounts<'a> = HashMap<NGram<'a>, usize>;

/// Count every contiguous window of `n` tokens.
///
/// Sequences shorter than `n` (and `n == 0`) produce an empty table.
pub fn count_ngrams(tokens: &[String], n: usize) -> NGramCounts<'_> {
  let mut counts = HashMap::new();
  if n == 0 || tokens.len() < n {
    return counts;
  }

  for window in tokens.windows(n) {
    *counts.entry(window).or_insert(0) += 1;
  }

  counts
}
