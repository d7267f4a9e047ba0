//! Report handlers - one per generated document.

mod error;
mod generate_form;
mod generate_workbook;

pub use error::GenerateReportError;
pub use generate_form::{GenerateFormCommand, GenerateFormHandler, GenerateFormResult};
pub use generate_workbook::{
    GenerateWorkbookCommand, GenerateWorkbookHandler, GenerateWorkbookResult,
};
