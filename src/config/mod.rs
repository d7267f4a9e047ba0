//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `AHP_REPORTS` prefix and nested values use double underscores as separators.
//! Only the output location and logging are configurable; document content is not.
//!
//! # Example
//!
//! ```no_run
//! use ahp_evaluation_reports::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Writing reports to {}", config.output.dir.display());
//! ```

mod error;
mod logging;
mod output;

pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use output::OutputConfig;

use serde::Deserialize;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "AHP_REPORTS";

/// Root application configuration
///
/// Every value has a default, so an empty environment yields a usable config.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Output directory and file names
    #[serde(default)]
    pub output: OutputConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `AHP_REPORTS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `AHP_REPORTS__OUTPUT__DIR=/srv/reports` -> `output.dir = /srv/reports`
    /// - `AHP_REPORTS__LOGGING__FORMAT=json` -> `logging.format = json`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix(ENV_PREFIX)
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for an empty output directory, file names
    /// with path separators or the wrong extension, or a bad log filter.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.output.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 6] = [
        "AHP_REPORTS__OUTPUT__DIR",
        "AHP_REPORTS__OUTPUT__WORKBOOK_FILE",
        "AHP_REPORTS__OUTPUT__FORM_FILE",
        "AHP_REPORTS__OUTPUT__CREATE_DIR",
        "AHP_REPORTS__LOGGING__LEVEL",
        "AHP_REPORTS__LOGGING__FORMAT",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(
            config.output.dir,
            PathBuf::from("/Users/flashcode/Documents/project-destra")
        );
        assert_eq!(
            config.output.workbook_file,
            "AHP_Evaluasi_Guru_SMP_PENIDA_KATAPANG_NEW.xlsx"
        );
        assert!(!config.output.create_dir);
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("AHP_REPORTS__OUTPUT__DIR", "/srv/reports");
        env::set_var("AHP_REPORTS__OUTPUT__CREATE_DIR", "true");
        env::set_var("AHP_REPORTS__LOGGING__FORMAT", "json");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.output.dir, PathBuf::from("/srv/reports"));
        assert!(config.output.create_dir);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_custom_file_names() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("AHP_REPORTS__OUTPUT__WORKBOOK_FILE", "ahp.xlsx");
        env::set_var("AHP_REPORTS__OUTPUT__FORM_FILE", "form.docx");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.output.workbook_file, "ahp.xlsx");
        assert_eq!(config.output.form_file, "form.docx");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_swapped_extensions() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("AHP_REPORTS__OUTPUT__WORKBOOK_FILE", "form.docx");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::WrongExtension { .. })
        ));
    }
}
