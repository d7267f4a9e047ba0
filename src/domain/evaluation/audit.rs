//! Dataset audit - read-only consistency report over the literal tables.
//!
//! Nothing here changes or rejects data. Findings are meant to be logged
//! next to the generated documents.

use serde::Serialize;
use std::fmt;

use crate::domain::foundation::{RubricBand, ScoreCategory};

use super::{EvaluationDataset, EvaluationForm};

/// Tolerance for the weight total.
pub const WEIGHT_TOLERANCE: f64 = 0.001;

/// Tolerance for `a_ij * a_ji`. Entered reciprocals such as 0.33 are rounded.
pub const RECIPROCAL_TOLERANCE: f64 = 0.05;

/// Tolerance between a recorded score and the weighted criterion sum.
pub const SCORE_TOLERANCE: f64 = 0.005;

/// A single divergence found in the data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AuditFinding {
    WeightsDoNotSumToOne { total: f64 },
    DiagonalNotUnity { code: String, value: f64 },
    NotReciprocal { row: String, col: String, product: f64 },
    FinalScoreDiffersFromWeightedSum { teacher: String, recorded: f64, weighted: f64 },
    CriterionCountMismatch { teacher: String, expected: usize, actual: usize },
    RankingOutOfOrder { rank: u32, teacher: String },
    RankedTeacherNotEvaluated { teacher: String },
    FormTeacherNotEvaluated { teacher: String },
    RankedScoreDiffers { teacher: String, ranked: f64, evaluated: f64 },
    CategoryOutsideBand { teacher: String, recorded: ScoreCategory, expected: ScoreCategory },
    RubricMarkDisagrees { teacher: String, criterion: String, marked: RubricBand, expected: RubricBand },
    FormTotalDiffers { teacher: String, form: f64, evaluated: f64 },
}

impl fmt::Display for AuditFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuditFinding::WeightsDoNotSumToOne { total } => {
                write!(f, "criterion weights sum to {:.3}, not 1", total)
            }
            AuditFinding::DiagonalNotUnity { code, value } => {
                write!(f, "matrix diagonal {} is {}, not 1", code, value)
            }
            AuditFinding::NotReciprocal { row, col, product } => write!(
                f,
                "{}/{} and {}/{} are not reciprocal (product {:.3})",
                row, col, col, row, product
            ),
            AuditFinding::FinalScoreDiffersFromWeightedSum {
                teacher,
                recorded,
                weighted,
            } => write!(
                f,
                "{}: recorded score {:.2} differs from weighted sum {:.2}",
                teacher, recorded, weighted
            ),
            AuditFinding::CriterionCountMismatch {
                teacher,
                expected,
                actual,
            } => write!(
                f,
                "{}: {} criterion scores for {} criteria",
                teacher, actual, expected
            ),
            AuditFinding::RankingOutOfOrder { rank, teacher } => {
                write!(f, "rank {} ({}) scores above the previous rank", rank, teacher)
            }
            AuditFinding::RankedTeacherNotEvaluated { teacher } => {
                write!(f, "{} is ranked but has no evaluation row", teacher)
            }
            AuditFinding::FormTeacherNotEvaluated { teacher } => {
                write!(f, "{} has a form section but no evaluation row", teacher)
            }
            AuditFinding::RankedScoreDiffers {
                teacher,
                ranked,
                evaluated,
            } => write!(
                f,
                "{}: ranked score {:.2} differs from evaluation {:.2}",
                teacher, ranked, evaluated
            ),
            AuditFinding::CategoryOutsideBand {
                teacher,
                recorded,
                expected,
            } => write!(
                f,
                "{}: category '{}' recorded, score band is '{}'",
                teacher, recorded, expected
            ),
            AuditFinding::RubricMarkDisagrees {
                teacher,
                criterion,
                marked,
                expected,
            } => write!(
                f,
                "{}: {} ticked '{}', score falls in '{}'",
                teacher, criterion, marked, expected
            ),
            AuditFinding::FormTotalDiffers {
                teacher,
                form,
                evaluated,
            } => write!(
                f,
                "{}: form total {:.2} differs from evaluation {:.2}",
                teacher, form, evaluated
            ),
        }
    }
}

/// Stateless audit functions.
pub struct DatasetAudit;

impl DatasetAudit {
    /// Audits the workbook tables.
    pub fn run(dataset: &EvaluationDataset) -> Vec<AuditFinding> {
        let mut findings = Vec::new();
        Self::check_weights(dataset, &mut findings);
        Self::check_matrix(dataset, &mut findings);
        Self::check_final_scores(dataset, &mut findings);
        Self::check_ranking(dataset, &mut findings);
        findings
    }

    /// Audits the form's rubric ticks and totals against the evaluation table.
    ///
    /// Rubric rows are matched to evaluation scores by position. A section
    /// whose mark count differs from the score count is reported and its
    /// overlapping rows are still checked.
    pub fn rubric(form: &EvaluationForm, dataset: &EvaluationDataset) -> Vec<AuditFinding> {
        let mut findings = Vec::new();

        for section in &form.sections {
            let Some(evaluation) = dataset.find_evaluation(&section.teacher_name) else {
                findings.push(AuditFinding::FormTeacherNotEvaluated {
                    teacher: section.teacher_name.clone(),
                });
                continue;
            };

            if section.rubric.len() != evaluation.criterion_scores.len() {
                findings.push(AuditFinding::CriterionCountMismatch {
                    teacher: section.teacher_name.clone(),
                    expected: section.rubric.len(),
                    actual: evaluation.criterion_scores.len(),
                });
            }

            for (row, score) in section.rubric.iter().zip(&evaluation.criterion_scores) {
                let expected = RubricBand::for_score(score.value());
                if row.mark != expected {
                    findings.push(AuditFinding::RubricMarkDisagrees {
                        teacher: section.teacher_name.clone(),
                        criterion: row.criterion.clone(),
                        marked: row.mark,
                        expected,
                    });
                }
            }

            let form_total = section.total_score.value();
            let evaluated = evaluation.final_score.value();
            if (form_total - evaluated).abs() > SCORE_TOLERANCE {
                findings.push(AuditFinding::FormTotalDiffers {
                    teacher: section.teacher_name.clone(),
                    form: form_total,
                    evaluated,
                });
            }
        }

        findings
    }

    fn check_weights(dataset: &EvaluationDataset, findings: &mut Vec<AuditFinding>) {
        let total = dataset.weight_total();
        if (total - 1.0).abs() > WEIGHT_TOLERANCE {
            findings.push(AuditFinding::WeightsDoNotSumToOne { total });
        }
    }

    fn check_matrix(dataset: &EvaluationDataset, findings: &mut Vec<AuditFinding>) {
        let matrix = &dataset.matrix;
        let codes = matrix.codes();

        for i in 0..matrix.size() {
            if let Some(value) = matrix.value_at(i, i) {
                if (value - 1.0).abs() > f64::EPSILON {
                    findings.push(AuditFinding::DiagonalNotUnity {
                        code: codes[i].clone(),
                        value,
                    });
                }
            }

            for j in (i + 1)..matrix.size() {
                let (Some(a), Some(b)) = (matrix.value_at(i, j), matrix.value_at(j, i)) else {
                    continue;
                };
                let product = a * b;
                if (product - 1.0).abs() > RECIPROCAL_TOLERANCE {
                    findings.push(AuditFinding::NotReciprocal {
                        row: codes[i].clone(),
                        col: codes[j].clone(),
                        product,
                    });
                }
            }
        }
    }

    fn check_final_scores(dataset: &EvaluationDataset, findings: &mut Vec<AuditFinding>) {
        for evaluation in &dataset.evaluations {
            if evaluation.criterion_scores.len() != dataset.criteria.len() {
                findings.push(AuditFinding::CriterionCountMismatch {
                    teacher: evaluation.name.clone(),
                    expected: dataset.criteria.len(),
                    actual: evaluation.criterion_scores.len(),
                });
                continue;
            }

            let weighted: f64 = evaluation
                .criterion_scores
                .iter()
                .zip(&dataset.criteria)
                .map(|(score, criterion)| score.value() * criterion.weight.value())
                .sum();
            let recorded = evaluation.final_score.value();

            if (weighted - recorded).abs() > SCORE_TOLERANCE {
                findings.push(AuditFinding::FinalScoreDiffersFromWeightedSum {
                    teacher: evaluation.name.clone(),
                    recorded,
                    weighted,
                });
            }
        }
    }

    fn check_ranking(dataset: &EvaluationDataset, findings: &mut Vec<AuditFinding>) {
        let mut previous: Option<f64> = None;

        for entry in &dataset.ranking {
            let score = entry.score.value();

            if previous.is_some_and(|p| score > p) {
                findings.push(AuditFinding::RankingOutOfOrder {
                    rank: entry.rank,
                    teacher: entry.teacher_name.clone(),
                });
            }
            previous = Some(score);

            match dataset.find_evaluation(&entry.teacher_name) {
                None => findings.push(AuditFinding::RankedTeacherNotEvaluated {
                    teacher: entry.teacher_name.clone(),
                }),
                Some(evaluation) => {
                    let evaluated = evaluation.final_score.value();
                    if (evaluated - score).abs() > SCORE_TOLERANCE {
                        findings.push(AuditFinding::RankedScoreDiffers {
                            teacher: entry.teacher_name.clone(),
                            ranked: score,
                            evaluated,
                        });
                    }
                }
            }

            let expected = ScoreCategory::from_score(score);
            if entry.category != expected {
                findings.push(AuditFinding::CategoryOutsideBand {
                    teacher: entry.teacher_name.clone(),
                    recorded: entry.category,
                    expected,
                });
            }
        }
    }
}
