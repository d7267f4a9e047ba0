//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Each handler audits its input, renders one document and stores it.

pub mod handlers;

pub use handlers::{
    GenerateFormCommand, GenerateFormHandler, GenerateFormResult, GenerateReportError,
    GenerateWorkbookCommand, GenerateWorkbookHandler, GenerateWorkbookResult,
};
