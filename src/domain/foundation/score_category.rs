//! Performance category labels for final scores.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Category assigned to a teacher's final score.
///
/// Bands: `>= 90` Sangat Baik, `>= 80` Baik, `>= 70` Cukup, `>= 60` Kurang,
/// anything lower Sangat Kurang.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreCategory {
    SangatKurang,
    Kurang,
    Cukup,
    Baik,
    SangatBaik,
}

impl ScoreCategory {
    /// Returns the category whose band contains `score`.
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            ScoreCategory::SangatBaik
        } else if score >= 80.0 {
            ScoreCategory::Baik
        } else if score >= 70.0 {
            ScoreCategory::Cukup
        } else if score >= 60.0 {
            ScoreCategory::Kurang
        } else {
            ScoreCategory::SangatKurang
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            ScoreCategory::SangatBaik => "Sangat Baik",
            ScoreCategory::Baik => "Baik",
            ScoreCategory::Cukup => "Cukup",
            ScoreCategory::Kurang => "Kurang",
            ScoreCategory::SangatKurang => "Sangat Kurang",
        }
    }
}

impl fmt::Display for ScoreCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ScoreCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sangat baik" => Ok(ScoreCategory::SangatBaik),
            "baik" => Ok(ScoreCategory::Baik),
            "cukup" => Ok(ScoreCategory::Cukup),
            "kurang" => Ok(ScoreCategory::Kurang),
            "sangat kurang" => Ok(ScoreCategory::SangatKurang),
            _ => Err(ValidationError::invalid_format(
                "kategori",
                format!("unknown category '{}'", s),
            )),
        }
    }
}
