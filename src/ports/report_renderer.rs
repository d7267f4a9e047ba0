//! Report Renderer Ports - Office document generation interfaces.
//!
//! These ports define the contract for turning the evaluation data into
//! office file bytes. The application layer depends on the traits, while
//! adapters (like XlsxWorkbookRenderer and DocxFormRenderer) provide the
//! implementation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::evaluation::{EvaluationDataset, EvaluationForm};

/// Port for rendering the evaluation workbook.
///
/// # Contract
///
/// Implementations must:
/// - Produce one sheet per table, in table order
/// - Write every literal value verbatim; nothing is recomputed
/// - Return a complete file that can be written to disk as-is
///
/// # Usage
///
/// ```rust,ignore
/// let renderer: &dyn SpreadsheetRenderer = get_renderer();
/// let bytes = renderer.render(&dataset)?;
/// ```
pub trait SpreadsheetRenderer: Send + Sync {
    /// Render the dataset into spreadsheet file bytes.
    ///
    /// # Errors
    ///
    /// Returns `RenderError` if the underlying writer rejects the content.
    fn render(&self, dataset: &EvaluationDataset) -> Result<Vec<u8>, RenderError>;

    /// Format produced by this renderer.
    fn format(&self) -> ReportFormat {
        ReportFormat::Xlsx
    }
}

/// Port for rendering the filled-in evaluation form.
pub trait FormRenderer: Send + Sync {
    /// Render the form into word-processor file bytes.
    ///
    /// # Errors
    ///
    /// Returns `RenderError` if the document cannot be packaged.
    fn render(&self, form: &EvaluationForm) -> Result<Vec<u8>, RenderError>;

    /// Format produced by this renderer.
    fn format(&self) -> ReportFormat {
        ReportFormat::Docx
    }
}

/// Office formats produced by the renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    /// Office Open XML workbook.
    Xlsx,
    /// Office Open XML word-processing document.
    Docx,
}

impl ReportFormat {
    /// Get the MIME content type for this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            ReportFormat::Xlsx => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            ReportFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }

    /// Get the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Xlsx => "xlsx",
            ReportFormat::Docx => "docx",
        }
    }

    /// Returns true if `file_name` carries this format's extension.
    pub fn matches_file_name(&self, file_name: &str) -> bool {
        std::path::Path::new(file_name)
            .extension()
            .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case(self.extension()))
            .unwrap_or(false)
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Xlsx => write!(f, "xlsx"),
            ReportFormat::Docx => write!(f, "docx"),
        }
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "xlsx" | "excel" => Ok(ReportFormat::Xlsx),
            "docx" | "word" => Ok(ReportFormat::Docx),
            _ => Err(RenderError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Errors that can occur while rendering a report.
#[derive(Debug, Clone, Error)]
pub enum RenderError {
    /// Unsupported format requested.
    #[error("Unsupported report format: {0}")]
    UnsupportedFormat(String),

    /// The spreadsheet writer rejected a sheet, cell or format.
    #[error("Workbook rendering failed: {0}")]
    WorkbookFailed(String),

    /// The document could not be built or packaged.
    #[error("Document rendering failed: {0}")]
    DocumentFailed(String),

    /// The input does not have the shape the layout expects.
    #[error("Invalid report input: {0}")]
    InvalidInput(String),
}

impl RenderError {
    /// Create a workbook rendering error.
    pub fn workbook(reason: impl std::fmt::Display) -> Self {
        Self::WorkbookFailed(reason.to_string())
    }

    /// Create a document rendering error.
    pub fn document(reason: impl std::fmt::Display) -> Self {
        Self::DocumentFailed(reason.to_string())
    }

    /// Create an invalid input error.
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput(reason.into())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
