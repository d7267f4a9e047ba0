//! Domain layer containing the evaluation data model.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, errors)
//! - `evaluation` - Criteria, scores, rankings, the form content and the audit

pub mod evaluation;
pub mod foundation;
