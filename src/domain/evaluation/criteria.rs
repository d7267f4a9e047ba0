//! Evaluation criteria and the pairwise comparison matrix.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ValidationError, Weight};

/// A single evaluation criterion with its recorded AHP weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    pub code: String,
    pub name: String,
    pub description: String,
    pub weight: Weight,
}

impl Criterion {
    /// Creates a criterion, validating code, name and weight range.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        weight: f64,
    ) -> Result<Self, ValidationError> {
        let code = code.into();
        let name = name.into();
        if code.trim().is_empty() {
            return Err(ValidationError::empty_field("kode"));
        }
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("kriteria"));
        }
        Ok(Self {
            code,
            name,
            description: description.into(),
            weight: Weight::try_new(weight)?,
        })
    }
}

/// Square matrix of pairwise comparison values between criteria.
///
/// Only the shape is checked. Values are kept exactly as entered and are
/// never normalised.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairwiseMatrix {
    codes: Vec<String>,
    values: Vec<Vec<f64>>,
}

impl PairwiseMatrix {
    /// Creates a matrix from row labels and row values.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidFormat` if the number of rows or the
    /// length of any row differs from the number of codes.
    pub fn try_new(
        codes: Vec<impl Into<String>>,
        values: Vec<Vec<f64>>,
    ) -> Result<Self, ValidationError> {
        let codes: Vec<String> = codes.into_iter().map(Into::into).collect();
        if codes.is_empty() {
            return Err(ValidationError::empty_field("matrix"));
        }
        if values.len() != codes.len() {
            return Err(ValidationError::invalid_format(
                "matrix",
                format!("expected {} rows, got {}", codes.len(), values.len()),
            ));
        }
        for (idx, row) in values.iter().enumerate() {
            if row.len() != codes.len() {
                return Err(ValidationError::invalid_format(
                    "matrix",
                    format!(
                        "row {} has {} values, expected {}",
                        codes[idx],
                        row.len(),
                        codes.len()
                    ),
                ));
            }
        }
        Ok(Self { codes, values })
    }

    /// Criterion codes in row (and column) order.
    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    /// Number of criteria compared.
    pub fn size(&self) -> usize {
        self.codes.len()
    }

    /// Value at the given row and column position.
    pub fn value_at(&self, row: usize, col: usize) -> Option<f64> {
        self.values.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Value comparing `row_code` against `col_code`.
    pub fn get(&self, row_code: &str, col_code: &str) -> Option<f64> {
        let row = self.codes.iter().position(|c| c == row_code)?;
        let col = self.codes.iter().position(|c| c == col_code)?;
        self.value_at(row, col)
    }

    /// Iterates rows as `(code, values)` pairs.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.codes
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().map(Vec::as_slice))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn criterion_new_rejects_blank_code() {
        let err = Criterion::new(" ", "Kedisiplinan", "", 0.25).unwrap_err();
        assert_eq!(err.field(), "kode");
    }

    #[test]
    fn criterion_new_rejects_weight_above_one() {
        assert!(Criterion::new("K1", "Kedisiplinan", "", 1.5).is_err());
    }

    #[test]
    fn matrix_rejects_ragged_rows() {
        let result = PairwiseMatrix::try_new(
            vec!["K1", "K2"],
            vec![vec![1.0, 0.5], vec![2.0]],
        );
        assert!(matches!(result, Err(ValidationError::InvalidFormat { .. })));
    }

    #[test]
    fn matrix_rejects_wrong_row_count() {
        let result = PairwiseMatrix::try_new(vec!["K1", "K2"], vec![vec![1.0, 0.5]]);
        assert!(result.is_err());
    }

    #[test]
    fn matrix_looks_up_by_code() {
        let matrix = PairwiseMatrix::try_new(
            vec!["K1", "K2"],
            vec![vec![1.0, 0.5], vec![2.0, 1.0]],
        )
        .unwrap();
        assert_eq!(matrix.get("K1", "K2"), Some(0.5));
        assert_eq!(matrix.get("K2", "K1"), Some(2.0));
        assert_eq!(matrix.get("K3", "K1"), None);
        assert_eq!(matrix.size(), 2);
    }

    #[test]
    fn matrix_rows_keep_order() {
        let matrix = PairwiseMatrix::try_new(
            vec!["K1", "K2"],
            vec![vec![1.0, 0.5], vec![2.0, 1.0]],
        )
        .unwrap();
        let codes: Vec<_> = matrix.rows().map(|(code, _)| code).collect();
        assert_eq!(codes, vec!["K1", "K2"]);
    }
}
