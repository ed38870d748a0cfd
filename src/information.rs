//! Information values of n-grams relative to a reference corpus.
//!
//! For an n-gram `w_1..w_n` the information value is
//! `log2((0.1 + count(w_1..w_{n-1})) / (0.1 + count(w_1..w_n)))`, where counts
//! are taken over the reference stream. The 0.1 smoothing keeps unseen n-grams
//! finite and biases them towards a positive value.

use crate::options::NgramMatching;
use crate::reference::ReferenceCorpus;
use log::trace;

#[cfg(not(feature = "parallel"))]
use std::cell::RefCell;
#[cfg(not(feature = "parallel"))]
use std::collections::HashMap;

#[cfg(feature = "parallel")]
use dashmap::DashMap;

const SMOOTHING: f64 = 0.1;

/// Cache key: the matching mode and the n-gram's tokens.
///
/// Keeping the tokens apart means `["a b"]` and `["a", "b"]` never share a slot.
pub type InfoKey = (NgramMatching, Vec<String>);

/// Memo table of information values keyed by matching mode and n-gram tokens.
///
/// One cache belongs to one reference corpus. It only grows until it is
/// cleared together with the reference it was filled from.
#[cfg(not(feature = "parallel"))]
#[derive(Debug, Default)]
pub struct InfoCache {
  values: RefCell<HashMap<InfoKey, f64>>,
}

#[cfg(not(feature = "parallel"))]
impl InfoCache {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn get(&self, key: &InfoKey) -> Option<f64> {
    self.values.borrow().get(key).copied()
  }

  pub fn insert(&self, key: InfoKey, value: f64) {
    self.values.borrow_mut().insert(key, value);
  }

  pub fn len(&self) -> usize {
    self.values.borrow().len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  pub fn clear(&mut self) {
    self.values.get_mut().clear();
  }
}

/// Memo table of information values keyed by matching mode and n-gram tokens.
///
/// One cache belongs to one reference corpus. It only grows until it is
/// cleared together with the reference it was filled from. Safe to share
/// across threads.
#[cfg(feature = "parallel")]
#[derive(Debug, Default)]
pub struct InfoCache {
  values: DashMap<InfoKey, f64>,
}

#[cfg(feature = "parallel")]
impl InfoCache {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn get(&self, key: &InfoKey) -> Option<f64> {
    self.values.get(key).map(|v| *v)
  }

  pub fn insert(&self, key: InfoKey, value: f64) {
    self.values.insert(key, value);
  }

  pub fn len(&self) -> usize {
    self.values.len()
  }

  pub fn is_empty(&self) -> bool {
    self.values.is_empty()
  }

  pub fn clear(&mut self) {
    self.values.clear();
  }
}

/// Computes (or recalls) the information value of `ngram`.
pub fn information_value(
  reference: &ReferenceCorpus,
  cache: &InfoCache,
  ngram: &[String],
  matching: NgramMatching,
) -> f64 {
  let key = (matching, ngram.to_vec());
  if let Some(value) = cache.get(&key) {
    return value;
  }

  let joined = ngram.join(" ");
  let prefix = ngram[..ngram.len().saturating_sub(1)].join(" ");
  let prefix_count = SMOOTHING + reference.occurrences(&prefix, matching) as f64;
  let full_count = SMOOTHING + reference.occurrences(&joined, matching) as f64;
  let value = (prefix_count / full_count).log2();

  trace!("Information value of '{}' = {}", joined, value);
  cache.insert(key, value);
  value
}

#[cfg(test)]
mod tests {
  use super::*;

  fn ngram(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
  }

  #[test]
  fn test_unseen_unigram() {
    let reference = ReferenceCorpus::from_text("the cat sat on the mat", 1000);
    let cache = InfoCache::new();
    let value = information_value(&reference, &cache, &ngram("zebra"), NgramMatching::Substring);
    // The empty prefix counts every character position: 22 chars + 1.
    let expected = ((0.1 + 23.0) / 0.1f64).log2();
    assert!((value - expected).abs() < 1e-12);
    assert!(value > 0.0);
  }

  #[test]
  fn test_bigram_uses_prefix_count() {
    let reference = ReferenceCorpus::from_text("the cat sat on the mat", 1000);
    let cache = InfoCache::new();
    let value = information_value(&reference, &cache, &ngram("the cat"), NgramMatching::Substring);
    // "the" appears twice, "the cat" once.
    let expected = (2.1f64 / 1.1).log2();
    assert!((value - expected).abs() < 1e-12);
  }

  #[test]
  fn test_memoized() {
    let reference = ReferenceCorpus::from_text("a b a", 1000);
    let cache = InfoCache::new();
    assert!(cache.is_empty());
    let first = information_value(&reference, &cache, &ngram("a"), NgramMatching::Substring);
    let second = information_value(&reference, &cache, &ngram("a"), NgramMatching::Substring);
    assert_eq!(first, second);
    assert_eq!(cache.len(), 1);
    assert_eq!(cache.get(&(NgramMatching::Substring, ngram("a"))), Some(first));
  }

  #[test]
  fn test_clear() {
    let mut cache = InfoCache::new();
    cache.insert((NgramMatching::Substring, ngram("x")), 1.0);
    cache.clear();
    assert!(cache.is_empty());
  }

  #[test]
  fn test_spaced_token_does_not_collide_with_bigram() {
    let reference = ReferenceCorpus::from_text("a b a b a c", 1000);
    let fresh = InfoCache::new();
    let expected = information_value(&reference, &fresh, &ngram("a b"), NgramMatching::Substring);

    let cache = InfoCache::new();
    information_value(&reference, &cache, &["a b".to_string()], NgramMatching::Substring);
    let bigram = information_value(&reference, &cache, &ngram("a b"), NgramMatching::Substring);
    assert_eq!(bigram, expected);
    assert_eq!(cache.len(), 2);
  }

  #[test]
  fn test_modes_cached_separately() {
    let reference = ReferenceCorpus::from_text("concatenate cat", 1000);
    let cache = InfoCache::new();
    let substring = information_value(&reference, &cache, &ngram("cat"), NgramMatching::Substring);
    let boundary = information_value(&reference, &cache, &ngram("cat"), NgramMatching::TokenBoundary);
    assert_ne!(substring, boundary);
    assert_eq!(cache.len(), 2);
  }

  #[test]
  fn test_values_are_never_negative() {
    for text in ["aaaa", "a b a b a c", "the cat concatenates the cat"] {
      let reference = ReferenceCorpus::from_text(text, 1000);
      for matching in [NgramMatching::Substring, NgramMatching::TokenBoundary] {
        let cache = InfoCache::new();
        for gram in ["a", "a b", "b a c", "cat", "the cat", "at"] {
          let value = information_value(&reference, &cache, &ngram(gram), matching);
          assert!(value >= 0.0, "{:?} {:?} -> {}", gram, matching, value);
        }
      }
    }
  }
}
