//! Emotion scoring and model asset management.
//!
//! The face classifier itself runs elsewhere; this crate turns its
//! per-expression probabilities into a bounded score and keeps the model
//! weight files available locally, fetching them from a CDN fallback chain.

pub mod models;
pub mod scoring;

pub use models::{ModelError, ModelLoader, ModelState};
pub use scoring::score_expressions;
