//! Formal criteria: four boolean compatibility facts, 25% each.
//!
//! Unlike the questionnaire scorers this is intentionally coarse: equality,
//! list containment and ordinal comparison only, never a similarity curve.

use serde::Serialize;

use crate::models::match_result::{ExtraDetail, FormalCriterion};
use crate::models::profile::{CandidateAdditionalData, OfferRequirements};
use crate::models::vocabulary::{
    is_experience_waiver, ExperienceBucket, IndustryChange, PositionLevel,
};

#[derive(Debug, Clone, Serialize)]
pub struct ExtraScore {
    pub percent: f64,
    pub details: Vec<ExtraDetail>,
}

pub fn score_extra(
    candidate: &CandidateAdditionalData,
    requirements: &OfferRequirements,
) -> ExtraScore {
    let industry = industry_matches(candidate.industry.as_deref(), requirements);
    let experience = experience_meets(
        candidate.experience.as_deref(),
        requirements.required_experience.as_deref(),
    );
    let position = position_meets(
        candidate.position_level.as_deref(),
        requirements.position_level.as_deref(),
    );
    let flexibility = industry_flexible(industry, candidate.wants_industry_change.as_deref());

    let details = vec![
        ExtraDetail {
            criterion: FormalCriterion::Industry,
            candidate_value: candidate.industry.clone(),
            required_value: requirements.industry.clone(),
            accepted_values: requirements.accepted_industries.clone(),
            matched: industry,
        },
        ExtraDetail {
            criterion: FormalCriterion::Experience,
            candidate_value: candidate.experience.clone(),
            required_value: requirements.required_experience.clone(),
            accepted_values: Vec::new(),
            matched: experience,
        },
        ExtraDetail {
            criterion: FormalCriterion::PositionLevel,
            candidate_value: candidate.position_level.clone(),
            required_value: requirements.position_level.clone(),
            accepted_values: Vec::new(),
            matched: position,
        },
        ExtraDetail {
            criterion: FormalCriterion::IndustryFlexibility,
            candidate_value: candidate.wants_industry_change.clone(),
            required_value: None,
            accepted_values: Vec::new(),
            matched: flexibility,
        },
    ];

    let matched = details.iter().filter(|d| d.matched).count();
    let percent = 100.0 * matched as f64 / details.len() as f64;

    ExtraScore { percent, details }
}

/// Equal to the required industry, or listed among the accepted ones.
fn industry_matches(candidate: Option<&str>, requirements: &OfferRequirements) -> bool {
    let Some(candidate) = non_blank(candidate) else {
        return false;
    };
    let required = non_blank(requirements.industry.as_deref());
    required == Some(candidate)
        || requirements
            .accepted_industries
            .iter()
            .any(|accepted| accepted.trim() == candidate)
}

/// An explicit waiver always passes. Otherwise the candidate bucket must be at
/// or above the required one; unknown buckets only pass on exact equality.
fn experience_meets(candidate: Option<&str>, required: Option<&str>) -> bool {
    let Some(required) = non_blank(required) else {
        return false;
    };
    if is_experience_waiver(required) {
        return true;
    }
    let Some(candidate) = non_blank(candidate) else {
        return false;
    };
    if candidate == required {
        return true;
    }
    match (ExperienceBucket::parse(candidate), ExperienceBucket::parse(required)) {
        (Some(have), Some(need)) => have >= need,
        _ => false,
    }
}

/// Equal level, or at/above the required rung of the seniority ladder.
fn position_meets(candidate: Option<&str>, required: Option<&str>) -> bool {
    let (Some(candidate), Some(required)) = (non_blank(candidate), non_blank(required)) else {
        return false;
    };
    if candidate == required {
        return true;
    }
    match (PositionLevel::parse(candidate), PositionLevel::parse(required)) {
        (Some(have), Some(need)) => have >= need,
        _ => false,
    }
}

fn industry_flexible(industry_matched: bool, wants_change: Option<&str>) -> bool {
    industry_matched
        || wants_change
            .and_then(IndustryChange::parse)
            .is_some_and(IndustryChange::accepts_change)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
