//! Linear similarity between two values on the shared 1–5 questionnaire scale.

use crate::models::profile::ScoreMap;

pub const SCALE_MIN: f64 = 1.0;
pub const SCALE_MAX: f64 = 5.0;
/// Midpoint substituted for any value missing on either side.
pub const NEUTRAL_SCORE: f64 = 3.0;

const MAX_DISTANCE: f64 = SCALE_MAX - SCALE_MIN;

/// Returns `1 - |a - b| / 4`, clamped to `[0, 1]`.
///
/// Identical values give 1.0, opposite ends of the scale (1 vs 5) give 0.0.
/// Never substitutes defaults: resolve missing values before calling.
pub fn dimension_match(a: f64, b: f64) -> f64 {
    (1.0 - (a - b).abs() / MAX_DISTANCE).clamp(0.0, 1.0)
}

/// `dimension_match` expressed as a 0–100 percentage.
pub fn match_percent(a: f64, b: f64) -> f64 {
    dimension_match(a, b) * 100.0
}

pub fn value_or_neutral(scores: &ScoreMap, code: &str) -> f64 {
    scores.get(code).copied().unwrap_or(NEUTRAL_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scale_points() -> Vec<f64> {
        (0..=16).map(|i| SCALE_MIN + i as f64 * 0.25).collect()
    }

    #[test]
    fn test_identity_is_one() {
        for x in scale_points() {
            assert_eq!(dimension_match(x, x), 1.0, "x = {x}");
        }
    }

    #[test]
    fn test_extremes_are_zero() {
        assert_eq!(dimension_match(1.0, 5.0), 0.0);
        assert_eq!(dimension_match(5.0, 1.0), 0.0);
    }

    #[test]
    fn test_symmetric_and_bounded() {
        for a in scale_points() {
            for b in scale_points() {
                let ab = dimension_match(a, b);
                assert_eq!(ab, dimension_match(b, a), "a = {a}, b = {b}");
                assert!((0.0..=1.0).contains(&ab), "a = {a}, b = {b}, got {ab}");
            }
        }
    }

    #[test]
    fn test_two_points_apart_is_half() {
        assert!((dimension_match(5.0, 3.0) - 0.5).abs() < f64::EPSILON);
        assert!((match_percent(3.0, 5.0) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_value_or_neutral_defaults_to_midpoint() {
        let mut scores = ScoreMap::new();
        scores.insert("communication".to_string(), 4.5);
        assert_eq!(value_or_neutral(&scores, "communication"), 4.5);
        assert_eq!(value_or_neutral(&scores, "creativity"), NEUTRAL_SCORE);
    }
}
