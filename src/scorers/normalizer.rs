//! Text normalization utilities.

use unicode_segmentation::UnicodeSegmentation;

/// Normalize raw text into a token sequence.
///
/// Lowercases everything, turns line breaks into spaces and splits on runs of
/// whitespace. Empty or blank input yields an empty sequence.
pub fn normalize(text: &str) -> Vec<String> {
  text
    .to_lowercase()
    .replace(['\n', '\r'], " ")
    .split_whitespace()
    .map(str::to_string)
    .collect()
}

/// Normalize raw text and re-join the tokens with single spaces.
pub fn normalize_to_string(text: &str) -> String {
  normalize(text).join(" ")
}

/// Split text into consecutive windows of `size` grapheme clusters.
///
/// The last window may be shorter. Empty text produces no windows, and a
/// `size` of zero keeps the text whole.
pub fn chunk(text: &str, size: usize) -> Vec<&str> {
  if text.is_empty() {
    return Vec::new();
  }
  if size == 0 {
    return vec![text];
  }

  let mut chunks = Vec::new();
  let mut start = 0;

  for (count, (offset, _)) in text.grapheme_indices(true).enumerate() {
    if count > 0 && count % size == 0 {
      chunks.push(&text[start..offset]);
      start = offset;
    }
  }
  chunks.push(&text[start..]);

  chunks
}
