//! Per-teacher evaluation rows and the ranking table.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Score, ScoreCategory, ValidationError};

/// One row of the teacher evaluation table.
///
/// `final_score` is the recorded AHP value. It is stored as entered and is
/// not derived from `criterion_scores`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeacherEvaluation {
    pub number: u32,
    pub name: String,
    pub subject: String,
    pub criterion_scores: Vec<Score>,
    pub final_score: Score,
}

impl TeacherEvaluation {
    /// Creates an evaluation row, validating every score.
    pub fn new(
        number: u32,
        name: impl Into<String>,
        subject: impl Into<String>,
        criterion_scores: &[f64],
        final_score: f64,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("nama_guru"));
        }
        let criterion_scores = criterion_scores
            .iter()
            .map(|&s| Score::try_new(s))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            number,
            name,
            subject: subject.into(),
            criterion_scores,
            final_score: Score::try_new(final_score)?,
        })
    }
}

/// One row of the ranking table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub rank: u32,
    pub teacher_name: String,
    pub score: Score,
    /// Category as recorded; not recomputed from `score`.
    pub category: ScoreCategory,
    pub recommendation: String,
}

impl RankingEntry {
    /// Creates a ranking row from its recorded category label.
    pub fn new(
        rank: u32,
        teacher_name: impl Into<String>,
        score: f64,
        category: &str,
        recommendation: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let teacher_name = teacher_name.into();
        if teacher_name.trim().is_empty() {
            return Err(ValidationError::empty_field("nama_guru"));
        }
        Ok(Self {
            rank,
            teacher_name,
            score: Score::try_new(score)?,
            category: category.parse()?,
            recommendation: recommendation.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluation_keeps_final_score_as_entered() {
        let eval = TeacherEvaluation::new(
            1,
            "Ahmad Fauzi, S.Pd",
            "Matematika",
            &[85.0, 90.0, 80.0, 75.0, 85.0],
            84.25,
        )
        .unwrap();
        assert_eq!(eval.final_score.value(), 84.25);
        assert_eq!(eval.criterion_scores.len(), 5);
    }

    #[test]
    fn evaluation_rejects_out_of_range_criterion_score() {
        let result = TeacherEvaluation::new(1, "A", "IPA", &[85.0, 120.0], 80.0);
        assert!(matches!(result, Err(ValidationError::OutOfRange { .. })));
    }

    #[test]
    fn evaluation_rejects_blank_name() {
        assert!(TeacherEvaluation::new(1, "", "IPA", &[], 80.0).is_err());
    }

    #[test]
    fn ranking_entry_keeps_recorded_category() {
        let entry = RankingEntry::new(
            1,
            "Budi Santoso, S.Pd",
            87.0,
            "Sangat Baik",
            "Pertahankan kinerja, jadikan mentor",
        )
        .unwrap();
        assert_eq!(entry.category, ScoreCategory::SangatBaik);
        assert_eq!(entry.score.category(), ScoreCategory::Baik);
    }

    #[test]
    fn ranking_entry_rejects_unknown_category() {
        assert!(RankingEntry::new(1, "Budi", 87.0, "Istimewa", "").is_err());
    }
}
