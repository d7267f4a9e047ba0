//! Errors shared by the report generation handlers.

use thiserror::Error;

use crate::domain::foundation::ValidationError;
use crate::ports::{RenderError, ReportFormat, StorageError};

/// Error type for report generation.
#[derive(Debug, Clone, Error)]
pub enum GenerateReportError {
    /// The report data could not be built.
    #[error("Invalid report data: {0}")]
    Validation(#[from] ValidationError),

    /// The renderer could not produce the document.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// The rendered bytes could not be written.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The target file name does not carry the renderer's extension.
    #[error("File name '{file_name}' does not end in .{format}")]
    FormatMismatch {
        file_name: String,
        format: ReportFormat,
    },
}

impl GenerateReportError {
    /// Creates a format mismatch error.
    pub fn format_mismatch(file_name: impl Into<String>, format: ReportFormat) -> Self {
        Self::FormatMismatch {
            file_name: file_name.into(),
            format,
        }
    }

    /// Checks `file_name` against the format a renderer produces.
    pub(crate) fn check_format(file_name: &str, format: ReportFormat) -> Result<(), Self> {
        if format.matches_file_name(file_name) {
            Ok(())
        } else {
            Err(Self::format_mismatch(file_name, format))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_mismatch_names_the_extension() {
        let err = GenerateReportError::format_mismatch("report.docx", ReportFormat::Xlsx);
        assert_eq!(
            err.to_string(),
            "File name 'report.docx' does not end in .xlsx"
        );
    }

    #[test]
    fn check_format_accepts_matching_extension() {
        assert!(GenerateReportError::check_format("a.xlsx", ReportFormat::Xlsx).is_ok());
        assert!(GenerateReportError::check_format("a.xlsx", ReportFormat::Docx).is_err());
    }

    #[test]
    fn storage_errors_pass_through_unchanged() {
        let err: GenerateReportError = StorageError::not_found("/missing").into();
        assert_eq!(err.to_string(), "File not found: /missing");
    }
}
