//! AHP Evaluation Reports - Teacher evaluation workbook and form generator
//!
//! This crate renders the SMP Penida Katapang AHP teacher-evaluation
//! exercise into an `.xlsx` workbook and a filled-in `.docx` form. All
//! scores, weights and rankings are literal data; nothing is computed.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
