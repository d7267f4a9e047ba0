//! `ahp-evaluation-reports` -- writes the AHP teacher-evaluation workbook
//! and the filled-in evaluation form.
//!
//! Takes no arguments. The two documents are generated one after the other
//! and each prints two lines to stdout once saved.
//!
//! # Environment variables
//!
//! | Variable                              | Default |
//! |---------------------------------------|---------|
//! | `AHP_REPORTS__OUTPUT__DIR`            | `/Users/flashcode/Documents/project-destra` |
//! | `AHP_REPORTS__OUTPUT__WORKBOOK_FILE`  | `AHP_Evaluasi_Guru_SMP_PENIDA_KATAPANG_NEW.xlsx` |
//! | `AHP_REPORTS__OUTPUT__FORM_FILE`      | `Form_Evaluasi_Guru_Terisi_SMP_PENIDA_KATAPANG_FIX.docx` |
//! | `AHP_REPORTS__OUTPUT__CREATE_DIR`     | `false` |
//! | `AHP_REPORTS__LOGGING__LEVEL`         | `info,ahp_evaluation_reports=debug` |
//! | `AHP_REPORTS__LOGGING__FORMAT`        | `pretty` |

use std::sync::Arc;

use ahp_evaluation_reports::adapters::{
    DocxFormRenderer, LocalArtifactStorage, XlsxWorkbookRenderer,
};
use ahp_evaluation_reports::application::{
    GenerateFormCommand, GenerateFormHandler, GenerateReportError, GenerateWorkbookCommand,
    GenerateWorkbookHandler,
};
use ahp_evaluation_reports::config::AppConfig;
use ahp_evaluation_reports::domain::evaluation::sample;
use ahp_evaluation_reports::ports::ArtifactStorage;
use ahp_evaluation_reports::telemetry;

#[tokio::main]
async fn main() {
    let config = AppConfig::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = telemetry::init(&config.logging) {
        eprintln!("Logging disabled: {}", e);
    }

    if let Err(e) = config.validate() {
        tracing::error!(error = %e, "Invalid configuration");
        std::process::exit(1);
    }

    tracing::debug!(
        dir = %config.output.dir.display(),
        create_dir = config.output.create_dir,
        "Generating reports"
    );

    if let Err(e) = run(&config).await {
        tracing::error!(error = %e, "Report generation failed");
        std::process::exit(1);
    }
}

async fn run(config: &AppConfig) -> Result<(), GenerateReportError> {
    let storage: Arc<dyn ArtifactStorage> = Arc::new(
        LocalArtifactStorage::new(&config.output.dir).creating_dir(config.output.create_dir),
    );
    let dataset = sample::evaluation_dataset()?;

    let workbook = GenerateWorkbookHandler::new(Arc::new(XlsxWorkbookRenderer::new()), storage.clone())
        .handle(GenerateWorkbookCommand::new(
            dataset.clone(),
            &config.output.workbook_file,
        ))
        .await?;
    for line in workbook.success_lines() {
        println!("{}", line);
    }

    let form = GenerateFormHandler::new(Arc::new(DocxFormRenderer::new()), storage)
        .handle(GenerateFormCommand::new(
            sample::evaluation_form()?,
            dataset,
            &config.output.form_file,
        ))
        .await?;
    for line in form.success_lines() {
        println!("{}", line);
    }

    Ok(())
}
