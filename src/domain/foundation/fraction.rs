//! Fraction value object (0.0-1.0 scale).
//!
//! Used for every bounded scalar in the model: per-element alignment scores,
//! the aggregate score, and structural dials such as centralization.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A finite value between 0.0 and 1.0 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Fraction(f64);

impl Fraction {
    /// Zero.
    pub const ZERO: Self = Self(0.0);

    /// One.
    pub const ONE: Self = Self(1.0);

    /// Midpoint of the range.
    pub const HALF: Self = Self(0.5);

    /// Creates a new Fraction, clamping to the valid range.
    ///
    /// NaN collapses to zero.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Creates a Fraction, returning error if out of range or not finite.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(ValidationError::out_of_range("fraction", 0.0, 1.0, value));
        }
        Ok(Self(value))
    }

    /// Returns the raw value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Adds a signed delta and clamps the result back into range.
    pub fn shifted_by(&self, delta: f64) -> Self {
        Self::new(self.0 + delta)
    }

    /// Returns the value as a whole percentage (0-100).
    pub fn as_percent(&self) -> u8 {
        (self.0 * 100.0).round() as u8
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Self::ZERO
    }
}

impl TryFrom<f64> for Fraction {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Fraction> for f64 {
    fn from(fraction: Fraction) -> Self {
        fraction.0
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_keeps_in_range_values() {
        assert_eq!(Fraction::new(0.0).value(), 0.0);
        assert_eq!(Fraction::new(0.7).value(), 0.7);
        assert_eq!(Fraction::new(1.0).value(), 1.0);
    }

    #[test]
    fn new_clamps_out_of_range_values() {
        assert_eq!(Fraction::new(1.4), Fraction::ONE);
        assert_eq!(Fraction::new(-0.2), Fraction::ZERO);
        assert_eq!(Fraction::new(f64::NAN), Fraction::ZERO);
        assert_eq!(Fraction::new(f64::INFINITY), Fraction::ONE);
    }

    #[test]
    fn try_new_rejects_out_of_range_values() {
        match Fraction::try_new(1.5) {
            Err(ValidationError::OutOfRange { field, actual, .. }) => {
                assert_eq!(field, "fraction");
                assert_eq!(actual, 1.5);
            }
            other => panic!("Expected OutOfRange error, got {:?}", other),
        }
        assert!(Fraction::try_new(f64::NAN).is_err());
    }

    #[test]
    fn shifted_by_clamps_at_both_ends() {
        assert_eq!(Fraction::new(0.9).shifted_by(0.3), Fraction::ONE);
        assert_eq!(Fraction::new(0.1).shifted_by(-0.3), Fraction::ZERO);
        assert!((Fraction::new(0.5).shifted_by(0.2).value() - 0.7).abs() < 1e-9);
    }

    #[test]
    fn displays_as_whole_percent() {
        assert_eq!(Fraction::new(0.7).to_string(), "70%");
        assert_eq!(Fraction::new(0.456).to_string(), "46%");
    }

    #[test]
    fn deserialization_rejects_values_above_one() {
        assert!(serde_json::from_str::<Fraction>("1.2").is_err());
        let ok: Fraction = serde_json::from_str("0.25").unwrap();
        assert_eq!(ok.value(), 0.25);
    }

    #[test]
    fn serializes_as_plain_number() {
        assert_eq!(serde_json::to_string(&Fraction::new(0.5)).unwrap(), "0.5");
    }
}
