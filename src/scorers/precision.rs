//! Clipped n-gram precision of one hypothesis against reference segments.
//!
//! Plain precision rewards a hypothesis that repeats a reference word over and
//! over. Clipping caps each hypothesis n-gram's credit at the most times it
//! occurs in any single reference segment.

use crate::fraction::Fraction;
use crate::scorers::ngram::{count_ngrams, NGram, NGramCounts};
use std::collections::HashMap;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Computes the modified precision for n-gram order `n`.
///
/// The numerator is the sum of clipped counts; the denominator is the number
/// of hypothesis n-grams, floored at one. The fraction is returned unreduced
/// so callers can micro-average across orders and hypotheses.
pub fn modified_precision(references: &[Vec<String>], hypothesis: &[String], n: usize) -> Fraction {
  let counts = count_ngrams(hypothesis, n);
  let max_counts = max_reference_counts(references, &counts, n);

  let numerator: usize = counts
    .iter()
    .map(|(ngram, count)| (*count).min(max_counts.get(*ngram).copied().unwrap_or(0)))
    .sum();
  let denominator = counts.values().sum::<usize>().max(1);

  Fraction::new(numerator as u64, denominator as u64)
}

/// For each hypothesis n-gram, its highest count in any one reference.
#[cfg(not(feature = "parallel"))]
fn max_reference_counts<'h>(
  references: &[Vec<String>],
  counts: &NGramCounts<'h>,
  n: usize,
) -> HashMap<NGram<'h>, usize> {
  let mut max_counts: HashMap<NGram<'h>, usize> = HashMap::with_capacity(counts.len());

  for reference in references {
    let reference_counts = count_ngrams(reference, n);
    for ngram in counts.keys() {
      let seen = reference_counts.get(*ngram).copied().unwrap_or(0);
      let entry = max_counts.entry(*ngram).or_insert(0);
      *entry = (*entry).max(seen);
    }
  }

  max_counts
}

/// For each hypothesis n-gram, its highest count in any one reference.
#[cfg(feature = "parallel")]
fn max_reference_counts<'h>(
  references: &[Vec<String>],
  counts: &NGramCounts<'h>,
  n: usize,
) -> HashMap<NGram<'h>, usize> {
  references
    .par_iter()
    .map(|reference| {
      let reference_counts = count_ngrams(reference, n);
      counts
        .keys()
        .map(|ngram| (*ngram, reference_counts.get(*ngram).copied().unwrap_or(0)))
        .collect::<HashMap<NGram<'h>, usize>>()
    })
    .reduce(HashMap::new, |mut acc, segment| {
      for (ngram, seen) in segment {
        let entry = acc.entry(ngram).or_insert(0);
        *entry = (*entry).max(seen);
      }
      acc
    })
}
