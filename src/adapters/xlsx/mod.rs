//! Spreadsheet adapter for the AHP evaluation workbook.

mod styles;
mod workbook_renderer;

pub use workbook_renderer::{XlsxWorkbookRenderer, SHEET_NAMES};
