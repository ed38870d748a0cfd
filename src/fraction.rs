//! An exact numerator/denominator pair for n-gram precision.
//!
//! Precision values are kept as integer counts until the very end so that
//! summing many small per-hypothesis fractions does not compound rounding
//! error.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An unreduced fraction of clipped matches over candidate n-grams.
///
/// The denominator is always at least one, including after deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "FractionParts")]
pub struct Fraction {
  numerator: u64,
  denominator: u64,
}

impl Fraction {
  /// Creates a fraction. A zero denominator is raised to one.
  pub fn new(numerator: u64, denominator: u64) -> Self {
    Self {
      numerator,
      denominator: denominator.max(1),
    }
  }

  /// `0/1`.
  pub fn zero() -> Self {
    Self::new(0, 1)
  }

  pub fn numerator(&self) -> u64 {
    self.numerator
  }

  pub fn denominator(&self) -> u64 {
    self.denominator
  }

  pub fn is_zero(&self) -> bool {
    self.numerator == 0
  }

  /// Floating-point value of the fraction.
  pub fn to_f64(&self) -> f64 {
    self.numerator as f64 / self.denominator() as f64
  }

  /// Natural logarithm, or `None` when the numerator is zero.
  pub fn ln(&self) -> Option<f64> {
    if self.is_zero() {
      None
    } else {
      Some(self.to_f64().ln())
    }
  }

  /// The same value in lowest terms.
  pub fn reduced(&self) -> Self {
    let divisor = gcd(self.numerator, self.denominator());
    Self::new(self.numerator / divisor, self.denominator() / divisor)
  }
}

#[derive(Deserialize)]
struct FractionParts {
  numerator: u64,
  denominator: u64,
}

impl From<FractionParts> for Fraction {
  fn from(parts: FractionParts) -> Self {
    Self::new(parts.numerator, parts.denominator)
  }
}

impl Default for Fraction {
  fn default() -> Self {
    Self::zero()
  }
}

impl fmt::Display for Fraction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}/{}", self.numerator, self.denominator())
  }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
  while b != 0 {
    let t = a % b;
    a = b;
    b = t;
  }
  a.max(1)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_new_floors_denominator() {
    let f = Fraction::new(0, 0);
    assert_eq!(f.denominator(), 1);
    assert_eq!(f.to_f64(), 0.0);
  }

  #[test]
  fn test_zero_is_zero_over_one() {
    let zero = Fraction::zero();
    assert_eq!(zero, Fraction::new(0, 1));
    assert_eq!(zero.to_string(), "0/1");
  }

  #[test]
  fn test_deserialize_floors_denominator() {
    let f: Fraction = serde_json::from_str(r#"{ "numerator": 0, "denominator": 0 }"#).unwrap();
    assert_eq!(f.denominator(), 1);
    assert_eq!(
      serde_json::to_string(&Fraction::zero()).unwrap(),
      r#"{"numerator":0,"denominator":1}"#
    );
  }

  #[test]
  fn test_ln_skips_zero() {
    assert_eq!(Fraction::new(0, 5).ln(), None);
    assert_eq!(Fraction::new(5, 5).ln(), Some(0.0));
  }

  #[test]
  fn test_reduced_and_display() {
    let f = Fraction::new(6, 8);
    assert_eq!(f.to_string(), "6/8");
    assert_eq!(f.reduced(), Fraction::new(3, 4));
    assert_eq!(Fraction::new(0, 7).reduced(), Fraction::new(0, 1));
  }
}
