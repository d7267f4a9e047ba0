//! Foundation module - Shared domain primitives.
//!
//! Contains value objects and error types that form the vocabulary of the
//! teacher evaluation domain.

mod errors;
mod rubric_band;
mod score;
mod score_category;
mod weight;

pub use errors::ValidationError;
pub use rubric_band::RubricBand;
pub use score::Score;
pub use score_category::ScoreCategory;
pub use weight::Weight;
