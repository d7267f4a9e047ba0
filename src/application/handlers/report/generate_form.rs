//! GenerateFormHandler - Command handler for the filled-in evaluation form.
//!
//! Checks the form's rubric ticks against the evaluation table, renders the
//! document and stores it. Like the workbook flow, findings are only logged.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::GenerateReportError;
use crate::domain::evaluation::{AuditFinding, DatasetAudit, EvaluationDataset, EvaluationForm};
use crate::ports::{ArtifactStorage, FormRenderer, StoredArtifact};

/// Command to generate the evaluation form.
#[derive(Debug, Clone)]
pub struct GenerateFormCommand {
    /// Form content to render.
    pub form: EvaluationForm,
    /// Evaluation tables the rubric ticks are audited against.
    pub dataset: EvaluationDataset,
    /// Name of the file to write.
    pub file_name: String,
}

impl GenerateFormCommand {
    pub fn new(
        form: EvaluationForm,
        dataset: EvaluationDataset,
        file_name: impl Into<String>,
    ) -> Self {
        Self {
            form,
            dataset,
            file_name: file_name.into(),
        }
    }
}

/// Result of successful form generation.
#[derive(Debug, Clone)]
pub struct GenerateFormResult {
    pub artifact: StoredArtifact,
    pub findings: Vec<AuditFinding>,
}

impl GenerateFormResult {
    /// Console lines printed after the form is saved.
    pub fn success_lines(&self) -> [String; 2] {
        [
            "Form evaluasi guru (sudah terisi) berhasil dibuat!".to_string(),
            format!("File tersimpan di: {}", self.artifact.display_path()),
        ]
    }
}

/// Handler for generating the evaluation form.
///
/// # Dependencies
///
/// - `FormRenderer`: Produce the document bytes
/// - `ArtifactStorage`: Write the file
pub struct GenerateFormHandler {
    renderer: Arc<dyn FormRenderer>,
    storage: Arc<dyn ArtifactStorage>,
}

impl GenerateFormHandler {
    pub fn new(renderer: Arc<dyn FormRenderer>, storage: Arc<dyn ArtifactStorage>) -> Self {
        Self { renderer, storage }
    }

    pub async fn handle(
        &self,
        cmd: GenerateFormCommand,
    ) -> Result<GenerateFormResult, GenerateReportError> {
        GenerateReportError::check_format(&cmd.file_name, self.renderer.format())?;

        let findings = DatasetAudit::rubric(&cmd.form, &cmd.dataset);
        for finding in &findings {
            warn!(%finding, "Form audit finding");
        }

        let bytes = self.renderer.render(&cmd.form)?;
        debug!(
            bytes = bytes.len(),
            sections = cmd.form.sections.len(),
            "Form rendered"
        );

        let artifact = self.storage.write(&cmd.file_name, &bytes).await?;
        info!(
            path = %artifact.path.display(),
            checksum = %artifact.checksum,
            findings = findings.len(),
            "Form stored"
        );

        Ok(GenerateFormResult { artifact, findings })
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
