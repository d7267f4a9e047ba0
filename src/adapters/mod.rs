//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `xlsx` - Workbook rendering (rust_xlsxwriter)
//! - `docx` - Form rendering (docx-rs)
//! - `storage` - Artifact storage (local filesystem, in-memory)

pub mod docx;
pub mod storage;
pub mod xlsx;

pub use docx::DocxFormRenderer;
pub use storage::{InMemoryArtifactStorage, LocalArtifactStorage};
pub use xlsx::{XlsxWorkbookRenderer, SHEET_NAMES};
