//! Application handlers.
//!
//! Command handlers that orchestrate rendering and storage.

pub mod report;

pub use report::{
    GenerateFormCommand, GenerateFormHandler, GenerateFormResult, GenerateReportError,
    GenerateWorkbookCommand, GenerateWorkbookHandler, GenerateWorkbookResult,
};
