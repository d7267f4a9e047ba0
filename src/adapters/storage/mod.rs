//! Storage adapters - Implementations of ArtifactStorage.
//!
//! - `LocalArtifactStorage` - Writes reports into a directory on disk
//! - `InMemoryArtifactStorage` - Keeps reports in memory (tests)

mod in_memory_artifact_storage;
mod local_artifact_storage;

pub use in_memory_artifact_storage::InMemoryArtifactStorage;
pub use local_artifact_storage::LocalArtifactStorage;
