use serde::{Deserialize, Serialize};
use thiserror::Error;

const SUM_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Error, PartialEq)]
pub enum WeightsError {
    #[error("weight '{name}' must be a finite, non-negative number (got {value})")]
    Invalid { name: &'static str, value: f64 },

    #[error("weights must sum to 1.0 (got {sum})")]
    BadSum { sum: f64 },
}

/// Category weights for the overall score. Immutable once built; injected
/// into every scoring call instead of living in a global.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ScoringWeights {
    competence: f64,
    culture: f64,
    extra: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            competence: 0.50,
            culture: 0.35,
            extra: 0.15,
        }
    }
}

impl ScoringWeights {
    pub fn new(competence: f64, culture: f64, extra: f64) -> Result<Self, WeightsError> {
        for (name, value) in [
            ("competence", competence),
            ("culture", culture),
            ("extra", extra),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(WeightsError::Invalid { name, value });
            }
        }
        let sum = competence + culture + extra;
        if (sum - 1.0).abs() > SUM_TOLERANCE {
            return Err(WeightsError::BadSum { sum });
        }
        Ok(Self {
            competence,
            culture,
            extra,
        })
    }

    pub fn competence(&self) -> f64 {
        self.competence
    }

    pub fn culture(&self) -> f64 {
        self.culture
    }

    pub fn extra(&self) -> f64 {
        self.extra
    }

    /// Weighted overall percentage.
    ///
    /// Takes the UNROUNDED category percentages; rounding them first would
    /// round twice and drift from the displayed headline.
    pub fn aggregate(&self, competence: f64, culture: f64, extra: f64) -> u8 {
        round_percent(self.competence * competence + self.culture * culture + self.extra * extra)
    }
}

/// Rounds half-up to an integer percentage clamped to `[0, 100]`.
pub fn round_percent(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        let w = ScoringWeights::default();
        assert!((w.competence() + w.culture() + w.extra() - 1.0).abs() < SUM_TOLERANCE);
    }

    #[test]
    fn test_aggregate_reference_example() {
        // 0.5*80 + 0.35*60 + 0.15*100 = 40 + 21 + 15
        assert_eq!(ScoringWeights::default().aggregate(80.0, 60.0, 100.0), 76);
    }

    #[test]
    fn test_aggregate_uses_unrounded_components() {
        let w = ScoringWeights::default();
        // 0.5 * 50.5 = 25.25 -> 25. Rounding 50.5 to 51 first would give 26.
        assert_eq!(w.aggregate(50.5, 0.0, 0.0), 25);
        assert_eq!(w.aggregate(f64::from(round_percent(50.5)), 0.0, 0.0), 26);
    }

    #[test]
    fn test_aggregate_bounds() {
        let w = ScoringWeights::default();
        assert_eq!(w.aggregate(0.0, 0.0, 0.0), 0);
        assert_eq!(w.aggregate(100.0, 100.0, 100.0), 100);
    }

    #[test]
    fn test_round_percent_half_up() {
        assert_eq!(round_percent(74.5), 75);
        assert_eq!(round_percent(74.49), 74);
        assert_eq!(round_percent(-3.0), 0);
        assert_eq!(round_percent(140.0), 100);
    }

    #[test]
    fn test_custom_weights_are_isolated() {
        let competence_only = ScoringWeights::new(1.0, 0.0, 0.0).unwrap();
        assert_eq!(competence_only.aggregate(40.0, 100.0, 100.0), 40);
        assert_eq!(ScoringWeights::default().aggregate(40.0, 100.0, 100.0), 70);
    }

    #[test]
    fn test_rejects_bad_sum() {
        assert!(matches!(
            ScoringWeights::new(0.5, 0.5, 0.5),
            Err(WeightsError::BadSum { .. })
        ));
    }

    #[test]
    fn test_rejects_negative_or_nan() {
        assert!(matches!(
            ScoringWeights::new(1.2, -0.2, 0.0),
            Err(WeightsError::Invalid { name: "culture", .. })
        ));
        assert!(matches!(
            ScoringWeights::new(f64::NAN, 0.5, 0.5),
            Err(WeightsError::Invalid {
                name: "competence",
                ..
            })
        ));
    }
}
