use serde::Serialize;

use crate::matching::dimension::{match_percent, value_or_neutral};
use crate::models::match_result::{CultureDetail, CultureStatus};
use crate::models::profile::{ScoreMap, CULTURE_DIMENSIONS};

const ALIGNED_THRESHOLD: f64 = 75.0;
const PARTIAL_THRESHOLD: f64 = 50.0;

/// Aggregate used when the candidate recorded no culture dimensions at all.
///
/// Competence treats absent data as a full match (100); culture with no
/// dimensions scores 50 instead.
pub const EMPTY_CULTURE_PERCENT: f64 = 50.0;

#[derive(Debug, Clone, Serialize)]
pub struct CultureScore {
    pub percent: f64,
    pub details: Vec<CultureDetail>,
}

pub fn classify_culture(match_percent: f64) -> CultureStatus {
    match match_percent {
        p if p >= ALIGNED_THRESHOLD => CultureStatus::Aligned,
        p if p >= PARTIAL_THRESHOLD => CultureStatus::Partial,
        _ => CultureStatus::Divergent,
    }
}

/// The candidate's dimension codes: canonical dimensions first in canonical
/// order, then any other recorded codes in sorted order.
pub fn ordered_dimensions(candidate: &ScoreMap) -> Vec<&str> {
    let mut codes: Vec<&str> = CULTURE_DIMENSIONS
        .iter()
        .map(|d| d.code)
        .filter(|code| candidate.contains_key(*code))
        .collect();
    codes.extend(
        candidate
            .keys()
            .map(String::as_str)
            .filter(|code| !CULTURE_DIMENSIONS.iter().any(|d| d.code == *code)),
    );
    codes
}

/// Scores exactly the dimensions the candidate recorded; the employer side
/// falls back to the midpoint for any dimension it lacks.
pub fn score_culture(candidate: &ScoreMap, employer: &ScoreMap) -> CultureScore {
    let details: Vec<CultureDetail> = ordered_dimensions(candidate)
        .into_iter()
        .map(|code| {
            let candidate_value = value_or_neutral(candidate, code);
            let employer_value = value_or_neutral(employer, code);
            let percent = match_percent(candidate_value, employer_value);
            CultureDetail {
                dimension: code.to_string(),
                candidate_value,
                employer_value,
                match_percent: percent,
                status: classify_culture(percent),
            }
        })
        .collect();

    let percent = if details.is_empty() {
        EMPTY_CULTURE_PERCENT
    } else {
        details.iter().map(|d| d.match_percent).sum::<f64>() / details.len() as f64
    };

    CultureScore { percent, details }
}
