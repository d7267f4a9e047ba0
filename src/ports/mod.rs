//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the application layer and the outside world. Adapters implement these ports.
//!
//! ## Rendering Ports
//!
//! - `SpreadsheetRenderer` - Evaluation dataset to workbook bytes
//! - `FormRenderer` - Evaluation form to word document bytes
//!
//! ## Storage Ports
//!
//! - `ArtifactStorage` - Persists generated files

mod artifact_storage;
mod report_renderer;

pub use artifact_storage::{validate_file_name, ArtifactStorage, StorageError, StoredArtifact};
pub use report_renderer::{FormRenderer, RenderError, ReportFormat, SpreadsheetRenderer};
