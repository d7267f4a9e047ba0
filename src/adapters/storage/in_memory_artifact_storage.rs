//! In-memory artifact storage implementation.
//!
//! Keeps generated files in a map instead of on disk. Useful for tests and
//! for rendering without touching the filesystem.

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use tokio::sync::RwLock;

use super::LocalArtifactStorage;
use crate::ports::{validate_file_name, ArtifactStorage, StorageError, StoredArtifact};

/// In-memory implementation of the ArtifactStorage port.
///
/// Thread-safe via internal `RwLock`. Nothing survives the process.
#[derive(Debug, Default)]
pub struct InMemoryArtifactStorage {
    files: RwLock<HashMap<String, Vec<u8>>>,
}

impl InMemoryArtifactStorage {
    /// Creates a new empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the names of all stored artifacts, sorted.
    pub async fn file_names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.files.read().await.keys().cloned().collect();
        names.sort();
        names
    }
}

#[async_trait]
impl ArtifactStorage for InMemoryArtifactStorage {
    async fn write(&self, file_name: &str, content: &[u8]) -> Result<StoredArtifact, StorageError> {
        validate_file_name(file_name)?;
        self.files
            .write()
            .await
            .insert(file_name.to_string(), content.to_vec());
        Ok(StoredArtifact::new(
            self.location(file_name),
            content.len() as u64,
            LocalArtifactStorage::compute_checksum(content),
        ))
    }

    async fn read(&self, file_name: &str) -> Result<Vec<u8>, StorageError> {
        self.files
            .read()
            .await
            .get(file_name)
            .cloned()
            .ok_or_else(|| StorageError::not_found(file_name))
    }

    async fn exists(&self, file_name: &str) -> Result<bool, StorageError> {
        Ok(self.files.read().await.contains_key(file_name))
    }

    fn location(&self, file_name: &str) -> PathBuf {
        PathBuf::from("memory").join(file_name)
    }
}
