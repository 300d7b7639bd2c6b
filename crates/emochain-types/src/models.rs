use serde::{Deserialize, Serialize};
use std::fmt;

/// An emotion score in the 1.0..=5.0 range with one decimal place of
/// precision, stored as integer tenths (10..=50).
///
/// The commitment string must reproduce the score byte-for-byte, so the
/// canonical rendering is fixed here: whole values print without a decimal
/// part ("5"), everything else prints one decimal digit ("4.2"). Callers
/// commit to the already-rounded score; re-rounding later would change the
/// digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct EmotionScore(u16);

impl EmotionScore {
    pub const MIN: EmotionScore = EmotionScore(10);
    pub const MAX: EmotionScore = EmotionScore(50);

    /// Build from integer tenths (42 => 4.2).
    pub fn from_tenths(tenths: u16) -> Result<Self, ScoreError> {
        if !(Self::MIN.0..=Self::MAX.0).contains(&tenths) {
            return Err(ScoreError::OutOfRange(f64::from(tenths) / 10.0));
        }
        Ok(Self(tenths))
    }

    /// Build from a raw value, rounding to the nearest tenth first.
    pub fn from_f64(value: f64) -> Result<Self, ScoreError> {
        if !value.is_finite() {
            return Err(ScoreError::OutOfRange(value));
        }
        let tenths = (value * 10.0).round();
        if tenths < f64::from(Self::MIN.0) || tenths > f64::from(Self::MAX.0) {
            return Err(ScoreError::OutOfRange(value));
        }
        Ok(Self(tenths as u16))
    }

    pub fn tenths(self) -> u16 {
        self.0
    }

    pub fn value(self) -> f64 {
        f64::from(self.0) / 10.0
    }
}

impl fmt::Display for EmotionScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 % 10 == 0 {
            write!(f, "{}", self.0 / 10)
        } else {
            write!(f, "{}.{}", self.0 / 10, self.0 % 10)
        }
    }
}

impl TryFrom<f64> for EmotionScore {
    type Error = ScoreError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_f64(value)
    }
}

impl From<EmotionScore> for f64 {
    fn from(score: EmotionScore) -> f64 {
        score.value()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ScoreError {
    #[error("emotion score {0} outside 1.0..=5.0")]
    OutOfRange(f64),
}

/// Per-expression probabilities reported by the face classifier, each in
/// 0.0..=1.0. Missing expressions default to zero, matching the classifier
/// output where absent classes are simply not reported.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ExpressionScores {
    #[serde(default)]
    pub happy: f64,
    #[serde(default)]
    pub surprised: f64,
    #[serde(default)]
    pub neutral: f64,
    #[serde(default)]
    pub sad: f64,
    #[serde(default)]
    pub angry: f64,
    #[serde(default)]
    pub fearful: f64,
    #[serde(default)]
    pub disgusted: f64,
}

/// Human-readable band for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmotionLabel {
    VeryHappy,
    Happy,
    Neutral,
    Sad,
    VerySad,
}

impl EmotionLabel {
    pub fn from_score(score: EmotionScore) -> Self {
        match score.tenths() {
            45.. => Self::VeryHappy,
            35..=44 => Self::Happy,
            25..=34 => Self::Neutral,
            15..=24 => Self::Sad,
            _ => Self::VerySad,
        }
    }
}

impl fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::VeryHappy => "Very Happy",
            Self::Happy => "Happy",
            Self::Neutral => "Neutral",
            Self::Sad => "Sad",
            Self::VerySad => "Very Sad",
        };
        write!(f, "{}", s)
    }
}

/// Fresh UUID-shaped session identifier, one per scan session.
pub fn new_session_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_renders_like_the_wire_format() {
        assert_eq!(EmotionScore::from_tenths(42).unwrap().to_string(), "4.2");
        assert_eq!(EmotionScore::from_tenths(50).unwrap().to_string(), "5");
        assert_eq!(EmotionScore::from_tenths(10).unwrap().to_string(), "1");
        assert_eq!(EmotionScore::from_tenths(35).unwrap().to_string(), "3.5");
    }

    #[test]
    fn score_range_is_enforced() {
        assert!(EmotionScore::from_tenths(9).is_err());
        assert!(EmotionScore::from_tenths(51).is_err());
        assert!(EmotionScore::from_f64(0.9).is_err());
        assert!(EmotionScore::from_f64(5.1).is_err());
        assert!(EmotionScore::from_f64(f64::NAN).is_err());
        assert_eq!(EmotionScore::from_f64(5.0).unwrap(), EmotionScore::MAX);
    }

    #[test]
    fn from_f64_rounds_to_one_decimal() {
        assert_eq!(EmotionScore::from_f64(4.24).unwrap().tenths(), 42);
        assert_eq!(EmotionScore::from_f64(4.25).unwrap().tenths(), 43);
    }

    #[test]
    fn label_band_edges() {
        let label = |t| EmotionLabel::from_score(EmotionScore::from_tenths(t).unwrap());
        assert_eq!(label(45), EmotionLabel::VeryHappy);
        assert_eq!(label(44), EmotionLabel::Happy);
        assert_eq!(label(35), EmotionLabel::Happy);
        assert_eq!(label(34), EmotionLabel::Neutral);
        assert_eq!(label(25), EmotionLabel::Neutral);
        assert_eq!(label(24), EmotionLabel::Sad);
        assert_eq!(label(15), EmotionLabel::Sad);
        assert_eq!(label(14), EmotionLabel::VerySad);
    }

    #[test]
    fn session_ids_are_uuid_shaped() {
        let id = new_session_id();
        assert_eq!(id.len(), 36);
        assert_eq!(id.matches('-').count(), 4);
    }

    #[test]
    fn score_serde_round_trip() {
        let score: EmotionScore = serde_json::from_str("4.2").unwrap();
        assert_eq!(score.tenths(), 42);
        assert_eq!(serde_json::to_string(&score).unwrap(), "4.2");
        assert!(serde_json::from_str::<EmotionScore>("0.5").is_err());
    }
}
