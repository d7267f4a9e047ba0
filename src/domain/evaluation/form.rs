//! The filled-in evaluation form rendered into the word document.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{RubricBand, Score};

/// A `label : value` line of an information table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoRow {
    pub label: String,
    pub value: String,
}

impl InfoRow {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Document heading lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormHeader {
    pub title: String,
    pub school: String,
    pub academic_year: String,
}

/// Who carried out the evaluation and when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluatorInfo {
    pub name: String,
    pub position: String,
    pub date: String,
    pub period: String,
}

impl EvaluatorInfo {
    /// Rows of the evaluator table, in print order.
    pub fn info_rows(&self) -> Vec<InfoRow> {
        vec![
            InfoRow::new("Nama Evaluator", &self.name),
            InfoRow::new("Jabatan", &self.position),
            InfoRow::new("Tanggal Evaluasi", &self.date),
            InfoRow::new("Periode Evaluasi", &self.period),
        ]
    }
}

/// One criterion line of the rubric table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RubricRow {
    pub number: u32,
    pub criterion: String,
    pub detail: String,
    /// The ticked column.
    pub mark: RubricBand,
}

impl RubricRow {
    pub fn new(
        number: u32,
        criterion: impl Into<String>,
        detail: impl Into<String>,
        mark: RubricBand,
    ) -> Self {
        Self {
            number,
            criterion: criterion.into(),
            detail: detail.into(),
            mark,
        }
    }

    /// Checkbox glyph for the given column.
    pub fn checkbox(&self, band: RubricBand) -> &'static str {
        if self.mark == band {
            "☑"
        } else {
            "□"
        }
    }
}

/// The filled-in section for one teacher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeacherNarrative {
    pub heading: String,
    pub teacher_name: String,
    pub nip: String,
    pub subject: String,
    pub classes: String,
    pub rubric: Vec<RubricRow>,
    pub total_score: Score,
    pub comments: Vec<String>,
}

impl TeacherNarrative {
    /// Rows of the teacher profile table, in print order.
    pub fn profile_rows(&self) -> Vec<InfoRow> {
        vec![
            InfoRow::new("Nama Guru", &self.teacher_name),
            InfoRow::new("NIP/NUPTK", &self.nip),
            InfoRow::new("Mata Pelajaran", &self.subject),
            InfoRow::new("Kelas yang Diampu", &self.classes),
        ]
    }
}

/// A signature block entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signatory {
    pub role: String,
    pub name: String,
}

impl Signatory {
    pub fn new(role: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            name: name.into(),
        }
    }

    /// Name as printed under the signature line.
    pub fn printed_name(&self) -> String {
        format!("({})", self.name)
    }
}

/// Complete content of the evaluation form document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationForm {
    pub header: FormHeader,
    pub evaluator: EvaluatorInfo,
    pub sections: Vec<TeacherNarrative>,
    pub signatories: Vec<Signatory>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkbox_ticks_only_the_marked_band() {
        let row = RubricRow::new(1, "Kedisiplinan", "(Ketepatan waktu, kehadiran)", RubricBand::Baik);
        let boxes: Vec<_> = RubricBand::ALL.iter().map(|b| row.checkbox(*b)).collect();
        assert_eq!(boxes, vec!["□", "☑", "□", "□"]);
    }

    #[test]
    fn signatory_printed_name_is_parenthesised() {
        let s = Signatory::new("Evaluator", "Dr. H. Asep Suryadi, M.Pd");
        assert_eq!(s.printed_name(), "(Dr. H. Asep Suryadi, M.Pd)");
    }

    #[test]
    fn evaluator_rows_follow_print_order() {
        let info = EvaluatorInfo {
            name: "A".into(),
            position: "B".into(),
            date: "C".into(),
            period: "D".into(),
        };
        let labels: Vec<_> = info.info_rows().into_iter().map(|r| r.label).collect();
        assert_eq!(
            labels,
            vec!["Nama Evaluator", "Jabatan", "Tanggal Evaluasi", "Periode Evaluasi"]
        );
    }
}
