use emochain_types::{EmotionScore, ExpressionScores};

/// Weighted mapping from classifier expression probabilities to a 1..=5
/// score. Positive expressions push the score up, negative ones pull it
/// down, and the result is clamped and rounded to one decimal.
///
/// Weights: happy 2.5, surprised 1.0, neutral 0.5, each negative expression
/// -0.3, on top of a base of 1.
pub fn score_expressions(expressions: &ExpressionScores) -> EmotionScore {
    let mut score = 1.0;
    score += finite(expressions.happy) * 2.5;
    score += finite(expressions.surprised) * 1.0;
    score += finite(expressions.neutral) * 0.5;

    let negative = finite(expressions.sad)
        + finite(expressions.angry)
        + finite(expressions.fearful)
        + finite(expressions.disgusted);
    score -= negative * 0.3;

    let clamped = score.clamp(1.0, 5.0);
    // Clamped to the valid range, so conversion cannot fail.
    EmotionScore::from_f64(clamped).unwrap_or(EmotionScore::MIN)
}

fn finite(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use emochain_types::EmotionLabel;

    #[test]
    fn blank_face_scores_the_floor() {
        let score = score_expressions(&ExpressionScores::default());
        assert_eq!(score, EmotionScore::MIN);
    }

    #[test]
    fn pure_happiness_scores_near_the_ceiling() {
        let expr = ExpressionScores {
            happy: 1.0,
            ..Default::default()
        };
        // 1 + 2.5 = 3.5
        assert_eq!(score_expressions(&expr).tenths(), 35);
    }

    #[test]
    fn everything_positive_saturates_at_five() {
        let expr = ExpressionScores {
            happy: 1.0,
            surprised: 1.0,
            neutral: 1.0,
            ..Default::default()
        };
        // 1 + 2.5 + 1.0 + 0.5 = 5.0
        assert_eq!(score_expressions(&expr), EmotionScore::MAX);
    }

    #[test]
    fn negative_expressions_pull_the_score_down() {
        let expr = ExpressionScores {
            happy: 0.8,
            sad: 0.5,
            angry: 0.5,
            ..Default::default()
        };
        // 1 + 0.8*2.5 - (0.5+0.5)*0.3 = 2.7
        assert_eq!(score_expressions(&expr).tenths(), 27);
    }

    #[test]
    fn all_negative_clamps_to_the_floor() {
        let expr = ExpressionScores {
            sad: 1.0,
            angry: 1.0,
            fearful: 1.0,
            disgusted: 1.0,
            ..Default::default()
        };
        assert_eq!(score_expressions(&expr), EmotionScore::MIN);
    }

    #[test]
    fn result_is_rounded_to_one_decimal() {
        let expr = ExpressionScores {
            happy: 0.33,
            ..Default::default()
        };
        // 1 + 0.825 = 1.825 -> 1.8
        assert_eq!(score_expressions(&expr).tenths(), 18);
    }

    #[test]
    fn fully_happy_face_labels_happy() {
        let expr = ExpressionScores {
            happy: 1.0,
            ..Default::default()
        };
        // 1 + 2.5 = 3.5, the bottom of the Happy band.
        let score = score_expressions(&expr);
        assert_eq!(EmotionLabel::from_score(score), EmotionLabel::Happy);
    }

    #[test]
    fn mostly_happy_face_labels_neutral() {
        let expr = ExpressionScores {
            happy: 0.9,
            neutral: 0.1,
            ..Default::default()
        };
        // 1 + 0.9*2.5 + 0.1*0.5 = 3.3, just under the Happy band.
        let score = score_expressions(&expr);
        assert_eq!(score.tenths(), 33);
        assert_eq!(EmotionLabel::from_score(score), EmotionLabel::Neutral);
    }
}
