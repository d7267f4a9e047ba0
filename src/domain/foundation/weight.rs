//! Weight value object (0.0-1.0 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A criterion weight between 0 and 1 inclusive.
///
/// Weights are recorded as typed; nothing requires a set of weights to
/// sum to one.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Weight(f64);

impl Weight {
    /// Creates a Weight, returning error if outside `[0, 1]` or not finite.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(ValidationError::out_of_range("weight", 0.0, 1.0, value));
        }
        Ok(Self(value))
    }

    /// Returns the raw value.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_try_new_accepts_bounds() {
        assert_eq!(Weight::try_new(0.0).unwrap().value(), 0.0);
        assert_eq!(Weight::try_new(0.25).unwrap().value(), 0.25);
        assert_eq!(Weight::try_new(1.0).unwrap().value(), 1.0);
    }

    #[test]
    fn weight_try_new_rejects_out_of_range() {
        assert!(Weight::try_new(-0.01).is_err());
        assert!(Weight::try_new(1.01).is_err());
        assert!(Weight::try_new(f64::NAN).is_err());
    }

    #[test]
    fn weight_displays_two_decimals() {
        assert_eq!(Weight::try_new(0.3).unwrap().to_string(), "0.30");
    }
}
