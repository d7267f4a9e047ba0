//! The evaluation dataset rendered into the workbook.

use serde::{Deserialize, Serialize};

use super::{Criterion, PairwiseMatrix, RankingEntry, TeacherEvaluation};

/// Title lines shown above each table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkbookTitles {
    pub criteria: Vec<String>,
    pub matrix: Vec<String>,
    pub evaluation: Vec<String>,
    pub ranking: Vec<String>,
}

/// All literal tables of the AHP evaluation exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationDataset {
    pub titles: WorkbookTitles,
    pub criteria: Vec<Criterion>,
    /// Explanatory lines printed under the criteria table.
    pub notes: Vec<String>,
    pub matrix: PairwiseMatrix,
    pub evaluations: Vec<TeacherEvaluation>,
    pub ranking: Vec<RankingEntry>,
}

impl EvaluationDataset {
    /// Criterion codes in table order.
    pub fn criterion_codes(&self) -> Vec<&str> {
        self.criteria.iter().map(|c| c.code.as_str()).collect()
    }

    /// Criterion names in table order.
    pub fn criterion_names(&self) -> Vec<&str> {
        self.criteria.iter().map(|c| c.name.as_str()).collect()
    }

    /// Sum of the recorded criterion weights.
    pub fn weight_total(&self) -> f64 {
        self.criteria.iter().map(|c| c.weight.value()).sum()
    }

    /// Finds a teacher's evaluation row by exact name.
    pub fn find_evaluation(&self, name: &str) -> Option<&TeacherEvaluation> {
        self.evaluations.iter().find(|e| e.name == name)
    }
}
