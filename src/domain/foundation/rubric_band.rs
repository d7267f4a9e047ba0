//! Rubric columns on the printed evaluation form.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One checkbox column of the evaluation rubric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RubricBand {
    SangatBaik,
    Baik,
    Cukup,
    Kurang,
}

impl RubricBand {
    /// All bands in the column order used on the form.
    pub const ALL: [RubricBand; 4] = [
        RubricBand::SangatBaik,
        RubricBand::Baik,
        RubricBand::Cukup,
        RubricBand::Kurang,
    ];

    /// Column header, including the score range.
    pub fn header(&self) -> &'static str {
        match self {
            RubricBand::SangatBaik => "Sangat Baik (90-100)",
            RubricBand::Baik => "Baik (80-89)",
            RubricBand::Cukup => "Cukup (70-79)",
            RubricBand::Kurang => "Kurang (<70)",
        }
    }

    /// Returns the band a criterion score belongs to.
    pub fn for_score(score: f64) -> Self {
        if score >= 90.0 {
            RubricBand::SangatBaik
        } else if score >= 80.0 {
            RubricBand::Baik
        } else if score >= 70.0 {
            RubricBand::Cukup
        } else {
            RubricBand::Kurang
        }
    }

    /// Returns true if `score` falls in this band.
    pub fn contains(&self, score: f64) -> bool {
        Self::for_score(score) == *self
    }

    /// Zero-based position among [`RubricBand::ALL`].
    pub fn column(&self) -> usize {
        match self {
            RubricBand::SangatBaik => 0,
            RubricBand::Baik => 1,
            RubricBand::Cukup => 2,
            RubricBand::Kurang => 3,
        }
    }
}

impl fmt::Display for RubricBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_match_form_columns() {
        let headers: Vec<_> = RubricBand::ALL.iter().map(|b| b.header()).collect();
        assert_eq!(
            headers,
            vec![
                "Sangat Baik (90-100)",
                "Baik (80-89)",
                "Cukup (70-79)",
                "Kurang (<70)"
            ]
        );
    }

    #[test]
    fn column_matches_position_in_all() {
        for (idx, band) in RubricBand::ALL.iter().enumerate() {
            assert_eq!(band.column(), idx);
        }
    }

    #[test]
    fn contains_respects_boundaries() {
        assert!(RubricBand::SangatBaik.contains(90.0));
        assert!(RubricBand::Baik.contains(80.0));
        assert!(RubricBand::Baik.contains(89.9));
        assert!(RubricBand::Cukup.contains(70.0));
        assert!(RubricBand::Kurang.contains(69.9));
        assert!(!RubricBand::Baik.contains(95.0));
    }
}
