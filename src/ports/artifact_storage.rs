//! Artifact Storage Port - Where generated documents are written.
//!
//! The application layer depends on this trait, while adapters (like
//! LocalArtifactStorage) provide the implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Port for persisting generated report files.
///
/// # Contract
///
/// Implementations must:
/// - Write atomically (no partial file on failure)
/// - Overwrite an existing artifact with the same name
/// - Report the SHA-256 checksum of what was written
///
/// # Usage
///
/// ```rust,ignore
/// let storage: &dyn ArtifactStorage = get_storage();
/// let stored = storage.write("report.xlsx", &bytes).await?;
/// println!("{} ({})", stored.path.display(), stored.checksum);
/// ```
#[async_trait]
pub trait ArtifactStorage: Send + Sync {
    /// Write artifact bytes under `file_name`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::InvalidFileName` for empty names or names with
    /// path separators, and `StorageError::Io` / `NotFound` /
    /// `PermissionDenied` when the write fails.
    async fn write(&self, file_name: &str, content: &[u8]) -> Result<StoredArtifact, StorageError>;

    /// Read back a stored artifact.
    async fn read(&self, file_name: &str) -> Result<Vec<u8>, StorageError>;

    /// Check whether an artifact exists.
    async fn exists(&self, file_name: &str) -> Result<bool, StorageError>;

    /// Location an artifact with this name is written to.
    fn location(&self, file_name: &str) -> PathBuf;
}

/// Record of a successfully written artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredArtifact {
    /// Where the artifact was written.
    pub path: PathBuf,

    /// Size in bytes.
    pub size_bytes: u64,

    /// Hex-encoded SHA-256 of the content.
    pub checksum: String,

    /// When the write completed.
    pub written_at: DateTime<Utc>,
}

impl StoredArtifact {
    /// Creates a new record.
    pub fn new(path: impl Into<PathBuf>, size_bytes: u64, checksum: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            size_bytes,
            checksum: checksum.into(),
            written_at: Utc::now(),
        }
    }

    /// Returns the path as a displayable string.
    pub fn display_path(&self) -> String {
        self.path.to_string_lossy().to_string()
    }
}

/// Validates an artifact file name.
///
/// Names must be non-empty and must not contain path separators or `..`.
pub fn validate_file_name(file_name: &str) -> Result<(), StorageError> {
    let trimmed = file_name.trim();
    if trimmed.is_empty()
        || trimmed == "."
        || trimmed == ".."
        || trimmed.contains('/')
        || trimmed.contains('\\')
        || Path::new(trimmed).components().count() != 1
    {
        return Err(StorageError::invalid_file_name(file_name));
    }
    Ok(())
}

/// Errors that can occur during artifact storage operations.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// File or directory was not found.
    #[error("File not found: {path}")]
    NotFound { path: String },

    /// Permission denied accessing the file.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    /// IO error during file operation.
    #[error("IO error: {message}")]
    Io { message: String },

    /// The artifact name is not a plain file name.
    #[error("Invalid artifact file name: '{file_name}'")]
    InvalidFileName { file_name: String },

    /// File is too large.
    #[error("File too large: {size_bytes} bytes (max: {max_bytes})")]
    FileTooLarge { size_bytes: u64, max_bytes: u64 },
}

impl StorageError {
    /// Creates a not found error.
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Creates a permission denied error.
    pub fn permission_denied(path: impl Into<String>) -> Self {
        Self::PermissionDenied { path: path.into() }
    }

    /// Creates an IO error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates an invalid file name error.
    pub fn invalid_file_name(file_name: impl Into<String>) -> Self {
        Self::InvalidFileName {
            file_name: file_name.into(),
        }
    }

    /// Creates a file too large error.
    pub fn file_too_large(size_bytes: u64, max_bytes: u64) -> Self {
        Self::FileTooLarge {
            size_bytes,
            max_bytes,
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => StorageError::not_found(err.to_string()),
            std::io::ErrorKind::PermissionDenied => {
                StorageError::permission_denied(err.to_string())
            }
            _ => StorageError::io(err.to_string()),
        }
    }
}
