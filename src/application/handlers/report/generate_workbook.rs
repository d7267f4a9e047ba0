//! GenerateWorkbookHandler - Command handler for the AHP evaluation workbook.
//!
//! Audits the dataset, renders it to spreadsheet bytes and stores the file.
//! Audit findings are logged and returned; they never block generation.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::GenerateReportError;
use crate::domain::evaluation::{AuditFinding, DatasetAudit, EvaluationDataset};
use crate::ports::{ArtifactStorage, SpreadsheetRenderer, StoredArtifact};

/// Command to generate the evaluation workbook.
#[derive(Debug, Clone)]
pub struct GenerateWorkbookCommand {
    /// Tables to render.
    pub dataset: EvaluationDataset,
    /// Name of the file to write.
    pub file_name: String,
}

impl GenerateWorkbookCommand {
    pub fn new(dataset: EvaluationDataset, file_name: impl Into<String>) -> Self {
        Self {
            dataset,
            file_name: file_name.into(),
        }
    }
}

/// Result of successful workbook generation.
#[derive(Debug, Clone)]
pub struct GenerateWorkbookResult {
    /// The written file.
    pub artifact: StoredArtifact,
    /// Divergences found in the dataset.
    pub findings: Vec<AuditFinding>,
}

impl GenerateWorkbookResult {
    /// Console lines printed after the workbook is saved.
    pub fn success_lines(&self) -> [String; 2] {
        [
            "File Excel AHP Evaluasi Guru berhasil dibuat!".to_string(),
            format!("File tersimpan di: {}", self.artifact.display_path()),
        ]
    }
}

/// Handler for generating the evaluation workbook.
///
/// # Dependencies
///
/// - `SpreadsheetRenderer`: Produce the workbook bytes
/// - `ArtifactStorage`: Write the file
///
/// # Usage
///
/// ```rust,ignore
/// let handler = GenerateWorkbookHandler::new(renderer, storage);
/// let result = handler.handle(GenerateWorkbookCommand::new(dataset, "ahp.xlsx")).await?;
/// for line in result.success_lines() {
///     println!("{}", line);
/// }
/// ```
pub struct GenerateWorkbookHandler {
    renderer: Arc<dyn SpreadsheetRenderer>,
    storage: Arc<dyn ArtifactStorage>,
}

impl GenerateWorkbookHandler {
    pub fn new(renderer: Arc<dyn SpreadsheetRenderer>, storage: Arc<dyn ArtifactStorage>) -> Self {
        Self { renderer, storage }
    }

    pub async fn handle(
        &self,
        cmd: GenerateWorkbookCommand,
    ) -> Result<GenerateWorkbookResult, GenerateReportError> {
        // 1. Reject a file name the renderer's format cannot match
        GenerateReportError::check_format(&cmd.file_name, self.renderer.format())?;

        // 2. Audit (report only)
        let findings = DatasetAudit::run(&cmd.dataset);
        for finding in &findings {
            warn!(%finding, "Dataset audit finding");
        }

        // 3. Render
        let bytes = self.renderer.render(&cmd.dataset)?;
        debug!(
            bytes = bytes.len(),
            teachers = cmd.dataset.evaluations.len(),
            "Workbook rendered"
        );

        // 4. Store
        let artifact = self.storage.write(&cmd.file_name, &bytes).await?;
        info!(
            path = %artifact.path.display(),
            checksum = %artifact.checksum,
            findings = findings.len(),
            "Workbook stored"
        );

        Ok(GenerateWorkbookResult { artifact, findings })
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryArtifactStorage, XlsxWorkbookRenderer};
    use crate::domain::evaluation::sample;
    use crate::ports::RenderError;

    // ───────────────────────────────────────────────────────────────
    // Mock implementations
    // ───────────────────────────────────────────────────────────────

    struct FailingRenderer;

    impl SpreadsheetRenderer for FailingRenderer {
        fn render(&self, _dataset: &EvaluationDataset) -> Result<Vec<u8>, RenderError> {
            Err(RenderError::workbook("sheet rejected"))
        }
    }

    fn handler_with(
        renderer: Arc<dyn SpreadsheetRenderer>,
    ) -> (GenerateWorkbookHandler, Arc<InMemoryArtifactStorage>) {
        let storage = Arc::new(InMemoryArtifactStorage::new());
        let handler = GenerateWorkbookHandler::new(renderer, storage.clone());
        (handler, storage)
    }

    fn command(file_name: &str) -> GenerateWorkbookCommand {
        GenerateWorkbookCommand::new(sample::evaluation_dataset().unwrap(), file_name)
    }

    // ───────────────────────────────────────────────────────────────
    // Handler tests
    // ───────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn stores_rendered_workbook() {
        let (handler, storage) = handler_with(Arc::new(XlsxWorkbookRenderer::new()));

        let result = handler.handle(command("ahp.xlsx")).await.unwrap();

        let stored = storage.read("ahp.xlsx").await.unwrap();
        assert_eq!(stored.len() as u64, result.artifact.size_bytes);
        assert!(stored.starts_with(b"PK"));
    }

    #[tokio::test]
    async fn returns_findings_without_blocking_output() {
        let (handler, storage) = handler_with(Arc::new(XlsxWorkbookRenderer::new()));

        let result = handler.handle(command("ahp.xlsx")).await.unwrap();

        assert!(!result.findings.is_empty());
        assert!(storage.exists("ahp.xlsx").await.unwrap());
    }

    #[tokio::test]
    async fn success_lines_name_the_stored_path() {
        let (handler, _storage) = handler_with(Arc::new(XlsxWorkbookRenderer::new()));

        let result = handler.handle(command("ahp.xlsx")).await.unwrap();

        assert_eq!(
            result.success_lines(),
            [
                "File Excel AHP Evaluasi Guru berhasil dibuat!".to_string(),
                "File tersimpan di: memory/ahp.xlsx".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn render_failure_writes_nothing() {
        let (handler, storage) = handler_with(Arc::new(FailingRenderer));

        let result = handler.handle(command("ahp.xlsx")).await;

        assert!(matches!(result, Err(GenerateReportError::Render(_))));
        assert!(storage.file_names().await.is_empty());
    }

    #[tokio::test]
    async fn rejects_non_xlsx_file_name() {
        let (handler, storage) = handler_with(Arc::new(XlsxWorkbookRenderer::new()));

        let result = handler.handle(command("ahp.docx")).await;

        assert!(matches!(
            result,
            Err(GenerateReportError::FormatMismatch { .. })
        ));
        assert!(storage.file_names().await.is_empty());
    }
}
