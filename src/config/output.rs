//! Output location configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::ports::{validate_file_name, ReportFormat};

/// Where the generated documents are written
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory both files are written to
    #[serde(default = "default_dir")]
    pub dir: PathBuf,

    /// Workbook file name
    #[serde(default = "default_workbook_file")]
    pub workbook_file: String,

    /// Form file name
    #[serde(default = "default_form_file")]
    pub form_file: String,

    /// Create `dir` if it does not exist
    #[serde(default)]
    pub create_dir: bool,
}

impl OutputConfig {
    /// Full path of the workbook
    pub fn workbook_path(&self) -> PathBuf {
        self.dir.join(&self.workbook_file)
    }

    /// Full path of the form
    pub fn form_path(&self) -> PathBuf {
        self.dir.join(&self.form_file)
    }

    /// Validate output configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("output.dir"));
        }
        check_file(&self.workbook_file, ReportFormat::Xlsx)?;
        check_file(&self.form_file, ReportFormat::Docx)
    }
}

fn check_file(file_name: &str, format: ReportFormat) -> Result<(), ValidationError> {
    validate_file_name(file_name)
        .map_err(|_| ValidationError::InvalidFileName(file_name.to_string()))?;
    if !format.matches_file_name(file_name) {
        return Err(ValidationError::WrongExtension {
            file_name: file_name.to_string(),
            extension: format.extension(),
        });
    }
    Ok(())
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            workbook_file: default_workbook_file(),
            form_file: default_form_file(),
            create_dir: false,
        }
    }
}

fn default_dir() -> PathBuf {
    PathBuf::from("/Users/flashcode/Documents/project-destra")
}

fn default_workbook_file() -> String {
    "AHP_Evaluasi_Guru_SMP_PENIDA_KATAPANG_NEW.xlsx".to_string()
}

fn default_form_file() -> String {
    "Form_Evaluasi_Guru_Terisi_SMP_PENIDA_KATAPANG_FIX.docx".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_config_defaults() {
        let config = OutputConfig::default();
        assert_eq!(
            config.workbook_path(),
            PathBuf::from(
                "/Users/flashcode/Documents/project-destra/AHP_Evaluasi_Guru_SMP_PENIDA_KATAPANG_NEW.xlsx"
            )
        );
        assert_eq!(
            config.form_path(),
            PathBuf::from(
                "/Users/flashcode/Documents/project-destra/Form_Evaluasi_Guru_Terisi_SMP_PENIDA_KATAPANG_FIX.docx"
            )
        );
        assert!(!config.create_dir);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_empty_dir() {
        let config = OutputConfig {
            dir: PathBuf::new(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("output.dir"))
        );
    }

    #[test]
    fn test_validation_rejects_nested_file_name() {
        let config = OutputConfig {
            workbook_file: "reports/ahp.xlsx".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidFileName(_))
        ));
    }

    #[test]
    fn test_validation_rejects_wrong_extension() {
        let config = OutputConfig {
            form_file: "form.pdf".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::WrongExtension {
                file_name: "form.pdf".to_string(),
                extension: "docx",
            })
        );
    }
}
