//! Evaluation module - the literal AHP teacher-evaluation data.
//!
//! # Components
//!
//! - `Criterion`, `PairwiseMatrix` - criteria table and comparison matrix
//! - `TeacherEvaluation`, `RankingEntry` - per-teacher results and ranking
//! - `EvaluationDataset` - everything rendered into the workbook
//! - `EvaluationForm` - everything rendered into the word document
//! - `DatasetAudit` - read-only report of divergences between the tables
//! - `sample` - the hand-entered data for SMP Penida Katapang

mod audit;
mod criteria;
mod dataset;
mod form;
mod results;
pub mod sample;

pub use audit::{
    AuditFinding, DatasetAudit, RECIPROCAL_TOLERANCE, SCORE_TOLERANCE, WEIGHT_TOLERANCE,
};
pub use criteria::{Criterion, PairwiseMatrix};
pub use dataset::{EvaluationDataset, WorkbookTitles};
pub use form::{
    EvaluationForm, EvaluatorInfo, FormHeader, InfoRow, RubricRow, Signatory, TeacherNarrative,
};
pub use results::{RankingEntry, TeacherEvaluation};
