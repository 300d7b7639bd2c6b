pub mod api;
pub mod models;

pub use models::{EmotionLabel, EmotionScore, ExpressionScores, ScoreError};
