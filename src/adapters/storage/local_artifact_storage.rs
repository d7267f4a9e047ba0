//! Local Filesystem Storage Adapter - Implementation of ArtifactStorage.
//!
//! Writes generated reports into a single output directory using atomic
//! writes and SHA-256 checksums.

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::warn;

use crate::ports::{validate_file_name, ArtifactStorage, StorageError, StoredArtifact};

/// Maximum artifact size allowed (50 MB).
const MAX_FILE_SIZE_BYTES: u64 = 50 * 1024 * 1024;

/// Local filesystem storage for generated reports.
///
/// # Atomic Writes
///
/// Uses a write-to-temp-then-rename pattern:
/// 1. Write content to `{file_name}.tmp`
/// 2. Sync to disk
/// 3. Rename to `{file_name}`
///
/// # Missing Directory
///
/// By default a missing output directory is an error, surfaced as
/// `StorageError::NotFound`. Use [`LocalArtifactStorage::creating_dir`] to
/// create it on first write instead.
///
/// # Usage
///
/// ```rust,ignore
/// let storage = LocalArtifactStorage::new("/srv/reports");
/// let stored = storage.write("report.xlsx", &bytes).await?;
/// ```
#[derive(Debug, Clone)]
pub struct LocalArtifactStorage {
    /// Directory all artifacts are written to.
    base_path: PathBuf,

    /// Create `base_path` if it does not exist.
    create_dir: bool,
}

impl LocalArtifactStorage {
    /// Creates a storage writing into an existing directory.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            create_dir: false,
        }
    }

    /// Creates the output directory on first write when `create_dir` is true.
    pub fn creating_dir(mut self, create_dir: bool) -> Self {
        self.create_dir = create_dir;
        self
    }

    fn artifact_path(&self, file_name: &str) -> PathBuf {
        self.base_path.join(file_name)
    }

    fn temp_path(&self, file_name: &str) -> PathBuf {
        self.base_path.join(format!("{}.tmp", file_name))
    }

    async fn ensure_base_dir(&self) -> Result<(), StorageError> {
        if !self.create_dir {
            return Ok(());
        }
        fs::create_dir_all(&self.base_path).await.map_err(|e| {
            StorageError::io(format!(
                "Failed to create output directory {}: {}",
                self.base_path.display(),
                e
            ))
        })
    }

    /// Writes, syncs and renames the temp file into place.
    async fn persist(
        mut file: fs::File,
        temp_path: &Path,
        final_path: &Path,
        content: &[u8],
    ) -> Result<(), StorageError> {
        file.write_all(content).await.map_err(|e| {
            StorageError::io(format!(
                "Failed to write to temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        file.sync_all().await.map_err(|e| {
            StorageError::io(format!(
                "Failed to sync temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;
        drop(file);

        fs::rename(temp_path, final_path).await.map_err(|e| {
            StorageError::io(format!(
                "Failed to rename {} to {}: {}",
                temp_path.display(),
                final_path.display(),
                e
            ))
        })
    }

    /// Computes SHA-256 checksum of the given content.
    pub(crate) fn compute_checksum(content: &[u8]) -> String {
        let mut hasher = Sha256::new();
        hasher.update(content);
        hex::encode(hasher.finalize())
    }
}

#[async_trait]
impl ArtifactStorage for LocalArtifactStorage {
    async fn write(&self, file_name: &str, content: &[u8]) -> Result<StoredArtifact, StorageError> {
        validate_file_name(file_name)?;

        let size = content.len() as u64;
        if size > MAX_FILE_SIZE_BYTES {
            return Err(StorageError::file_too_large(size, MAX_FILE_SIZE_BYTES));
        }

        self.ensure_base_dir().await?;

        let temp_path = self.temp_path(file_name);
        let final_path = self.artifact_path(file_name);

        let file = fs::File::create(&temp_path).await.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => StorageError::not_found(format!(
                "output directory {} does not exist",
                self.base_path.display()
            )),
            std::io::ErrorKind::PermissionDenied => {
                StorageError::permission_denied(temp_path.display().to_string())
            }
            _ => StorageError::io(format!(
                "Failed to create temp file {}: {}",
                temp_path.display(),
                e
            )),
        })?;

        if let Err(e) = Self::persist(file, &temp_path, &final_path, content).await {
            if let Err(cleanup) = fs::remove_file(&temp_path).await {
                warn!(path = %temp_path.display(), error = %cleanup, "Temp file left behind");
            }
            return Err(e);
        }

        Ok(StoredArtifact::new(
            final_path,
            size,
            Self::compute_checksum(content),
        ))
    }

    async fn read(&self, file_name: &str) -> Result<Vec<u8>, StorageError> {
        validate_file_name(file_name)?;
        let path = self.artifact_path(file_name);
        fs::read(&path).await.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => StorageError::not_found(path.display().to_string()),
            _ => StorageError::from(e),
        })
    }

    async fn exists(&self, file_name: &str) -> Result<bool, StorageError> {
        validate_file_name(file_name)?;
        Ok(fs::try_exists(self.artifact_path(file_name)).await?)
    }

    fn location(&self, file_name: &str) -> PathBuf {
        self.artifact_path(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_storage() -> (LocalArtifactStorage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalArtifactStorage::new(temp_dir.path());
        (storage, temp_dir)
    }

    #[tokio::test]
    async fn write_creates_file() {
        let (storage, temp_dir) = create_storage();

        let stored = storage.write("report.xlsx", b"PK-content").await.unwrap();

        assert_eq!(stored.path, temp_dir.path().join("report.xlsx"));
        assert!(stored.path.exists());
        assert_eq!(stored.size_bytes, 10);
    }

    #[tokio::test]
    async fn write_leaves_no_temp_file() {
        let (storage, temp_dir) = create_storage();

        storage.write("report.xlsx", b"data").await.unwrap();

        assert!(!temp_dir.path().join("report.xlsx.tmp").exists());
    }

    #[tokio::test]
    async fn failed_write_removes_temp_file() {
        let (storage, temp_dir) = create_storage();
        // A non-empty directory in the way makes the final rename fail.
        let blocker = temp_dir.path().join("report.xlsx");
        std::fs::create_dir(&blocker).unwrap();
        std::fs::write(blocker.join("keep"), b"x").unwrap();

        let result = storage.write("report.xlsx", b"data").await;

        assert!(matches!(result, Err(StorageError::Io { .. })));
        assert!(!temp_dir.path().join("report.xlsx.tmp").exists());
        assert!(blocker.is_dir());
    }

    #[tokio::test]
    async fn write_overwrites_existing() {
        let (storage, _temp_dir) = create_storage();

        storage.write("form.docx", b"first").await.unwrap();
        storage.write("form.docx", b"second").await.unwrap();

        assert_eq!(storage.read("form.docx").await.unwrap(), b"second");
    }

    #[tokio::test]
    async fn write_checksum_is_sha256_hex() {
        let (storage, _temp_dir) = create_storage();

        let stored = storage.write("a.xlsx", b"abc").await.unwrap();

        assert_eq!(
            stored.checksum,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[tokio::test]
    async fn write_fails_when_directory_missing() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalArtifactStorage::new(temp_dir.path().join("missing"));

        let result = storage.write("report.xlsx", b"data").await;

        assert!(matches!(result, Err(StorageError::NotFound { .. })));
    }

    #[tokio::test]
    async fn write_creates_directory_when_enabled() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("nested").join("out");
        let storage = LocalArtifactStorage::new(&dir).creating_dir(true);

        let stored = storage.write("report.xlsx", b"data").await.unwrap();

        assert_eq!(stored.path, dir.join("report.xlsx"));
        assert!(stored.path.exists());
    }

    #[tokio::test]
    async fn write_rejects_path_like_names() {
        let (storage, _temp_dir) = create_storage();

        let result = storage.write("../escape.xlsx", b"data").await;

        assert!(matches!(result, Err(StorageError::InvalidFileName { .. })));
    }

    #[tokio::test]
    async fn read_returns_not_found_for_missing() {
        let (storage, _temp_dir) = create_storage();

        let result = storage.read("missing.xlsx").await;

        assert!(matches!(result, Err(StorageError::NotFound { .. })));
    }

    #[tokio::test]
    async fn exists_reflects_writes() {
        let (storage, _temp_dir) = create_storage();

        assert!(!storage.exists("report.xlsx").await.unwrap());
        storage.write("report.xlsx", b"data").await.unwrap();
        assert!(storage.exists("report.xlsx").await.unwrap());
    }

    #[test]
    fn location_joins_base_path() {
        let storage = LocalArtifactStorage::new("/srv/reports");
        assert_eq!(
            storage.location("form.docx"),
            PathBuf::from("/srv/reports/form.docx")
        );
    }
}
