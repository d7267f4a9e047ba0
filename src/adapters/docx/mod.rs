//! Word-processing adapter for the filled-in evaluation form.

mod form_renderer;
mod layout;

pub use form_renderer::DocxFormRenderer;
