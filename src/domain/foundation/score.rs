//! Score value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{ScoreCategory, ValidationError};

/// An evaluation score between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(f64);

impl Score {
    /// Lowest possible score.
    pub const MIN: f64 = 0.0;

    /// Highest possible score.
    pub const MAX: f64 = 100.0;

    /// Creates a Score, returning error if outside `[0, 100]` or not finite.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::out_of_range(
                "score",
                Self::MIN,
                Self::MAX,
                value,
            ));
        }
        Ok(Self(value))
    }

    /// Returns the raw value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns the category band this score falls into.
    pub fn category(&self) -> ScoreCategory {
        ScoreCategory::from_score(self.0)
    }

    /// Formats with a single decimal, the way totals appear on the form.
    pub fn one_decimal(&self) -> String {
        format!("{:.1}", self.0)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_try_new_accepts_valid_values() {
        assert_eq!(Score::try_new(0.0).unwrap().value(), 0.0);
        assert_eq!(Score::try_new(84.25).unwrap().value(), 84.25);
        assert_eq!(Score::try_new(100.0).unwrap().value(), 100.0);
    }

    #[test]
    fn score_try_new_rejects_invalid_values() {
        assert!(Score::try_new(-1.0).is_err());
        assert!(Score::try_new(100.5).is_err());
        assert!(Score::try_new(f64::INFINITY).is_err());
    }

    #[test]
    fn score_formats() {
        let score = Score::try_new(87.0).unwrap();
        assert_eq!(score.to_string(), "87.00");
        assert_eq!(score.one_decimal(), "87.0");
    }

    #[test]
    fn score_category_follows_bands() {
        assert_eq!(Score::try_new(87.0).unwrap().category(), ScoreCategory::Baik);
        assert_eq!(Score::try_new(90.0).unwrap().category(), ScoreCategory::SangatBaik);
    }
}
