use serde::Serialize;

use crate::matching::dimension::{match_percent, value_or_neutral};
use crate::models::match_result::{CompetenceDetail, CompetenceStatus};
use crate::models::profile::{Competency, ScoreMap};

const EXCELLENT_THRESHOLD: f64 = 80.0;
const GOOD_THRESHOLD: f64 = 60.0;

#[derive(Debug, Clone, Serialize)]
pub struct CompetenceScore {
    /// Unrounded mean of the five axis percentages.
    pub percent: f64,
    pub details: Vec<CompetenceDetail>,
}

/// Thresholds are inclusive lower bounds.
pub fn classify_competence(match_percent: f64) -> CompetenceStatus {
    match match_percent {
        p if p >= EXCELLENT_THRESHOLD => CompetenceStatus::Excellent,
        p if p >= GOOD_THRESHOLD => CompetenceStatus::Good,
        _ => CompetenceStatus::NeedsWork,
    }
}

/// Compares candidate level against offer importance on every competency axis.
///
/// Axes absent on either side count as the neutral midpoint, so a completely
/// empty pair of maps scores 100: missing data is "no signal", not a penalty.
pub fn score_competence(candidate: &ScoreMap, requirements: &ScoreMap) -> CompetenceScore {
    let details: Vec<CompetenceDetail> = Competency::ALL
        .iter()
        .map(|&competency| {
            let candidate_value = value_or_neutral(candidate, competency.code());
            let required_value = value_or_neutral(requirements, competency.code());
            let percent = match_percent(candidate_value, required_value);
            CompetenceDetail {
                competency,
                candidate_value,
                required_value,
                match_percent: percent,
                status: classify_competence(percent),
            }
        })
        .collect();

    let percent = details.iter().map(|d| d.match_percent).sum::<f64>() / details.len() as f64;

    CompetenceScore { percent, details }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(pairs: &[(&str, f64)]) -> ScoreMap {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_status_thresholds_inclusive() {
        assert_eq!(classify_competence(80.0), CompetenceStatus::Excellent);
        assert_eq!(classify_competence(79.99), CompetenceStatus::Good);
        assert_eq!(classify_competence(60.0), CompetenceStatus::Good);
        assert_eq!(classify_competence(59.99), CompetenceStatus::NeedsWork);
        assert_eq!(classify_competence(100.0), CompetenceStatus::Excellent);
        assert_eq!(classify_competence(0.0), CompetenceStatus::NeedsWork);
    }

    #[test]
    fn test_all_absent_is_perfect() {
        let score = score_competence(&ScoreMap::new(), &ScoreMap::new());
        assert_eq!(score.percent, 100.0);
        assert_eq!(score.details.len(), 5);
        assert!(score
            .details
            .iter()
            .all(|d| d.status == CompetenceStatus::Excellent && d.candidate_value == 3.0));
    }

    #[test]
    fn test_details_follow_canonical_order() {
        let score = score_competence(&ScoreMap::new(), &ScoreMap::new());
        let order: Vec<_> = score.details.iter().map(|d| d.competency).collect();
        assert_eq!(order, Competency::ALL.to_vec());
    }

    #[test]
    fn test_mean_of_axes() {
        let candidate = scores(&[
            ("communication", 5.0),
            ("analytical_thinking", 1.0),
            ("creativity", 4.0),
            ("determination", 3.0),
            ("adaptability", 2.0),
        ]);
        let requirements = scores(&[
            ("communication", 5.0),
            ("analytical_thinking", 5.0),
            ("creativity", 3.0),
            ("determination", 3.0),
            ("adaptability", 4.0),
        ]);
        // 100, 0, 75, 100, 50
        let score = score_competence(&candidate, &requirements);
        assert!((score.percent - 65.0).abs() < 1e-9, "got {}", score.percent);
        let statuses: Vec<_> = score.details.iter().map(|d| d.status).collect();
        assert_eq!(
            statuses,
            vec![
                CompetenceStatus::Excellent,
                CompetenceStatus::NeedsWork,
                CompetenceStatus::Good,
                CompetenceStatus::Excellent,
                CompetenceStatus::NeedsWork,
            ]
        );
    }

    #[test]
    fn test_missing_requirement_defaults_to_midpoint() {
        let candidate = scores(&[("creativity", 5.0)]);
        let score = score_competence(&candidate, &ScoreMap::new());
        let creativity = &score.details[2];
        assert_eq!(creativity.required_value, 3.0);
        assert!((creativity.match_percent - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let candidate = scores(&[("leadership", 1.0)]);
        let score = score_competence(&candidate, &ScoreMap::new());
        assert_eq!(score.percent, 100.0);
    }
}
