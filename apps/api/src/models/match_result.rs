use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::profile::Competency;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CompetenceStatus {
    Excellent,
    Good,
    NeedsWork,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CultureStatus {
    Aligned,
    Partial,
    Divergent,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FormalCriterion {
    Industry,
    Experience,
    PositionLevel,
    IndustryFlexibility,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompetenceDetail {
    pub competency: Competency,
    pub candidate_value: f64,
    pub required_value: f64,
    pub match_percent: f64,
    pub status: CompetenceStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CultureDetail {
    pub dimension: String,
    pub candidate_value: f64,
    pub employer_value: f64,
    pub match_percent: f64,
    pub status: CultureStatus,
}

/// One formal criterion with the raw values it compared, so readers can show
/// "your value" next to "required value" without recomputing anything.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExtraDetail {
    pub criterion: FormalCriterion,
    pub candidate_value: Option<String>,
    pub required_value: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub accepted_values: Vec<String>,
    pub matched: bool,
}

/// Compatibility of one candidate with one employer offer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchResult {
    pub candidate_id: Uuid,
    pub employer_id: Uuid,
    pub job_offer_id: Option<Uuid>,
    pub overall_score: u8,
    pub competence_score: u8,
    pub culture_score: u8,
    pub extra_score: u8,
    pub competence_details: Vec<CompetenceDetail>,
    pub culture_details: Vec<CultureDetail>,
    pub extra_details: Vec<ExtraDetail>,
    pub strengths: Vec<String>,
    pub risks: Vec<String>,
}

/// A persisted result together with the time it was last recomputed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredMatch {
    #[serde(flatten)]
    pub result: MatchResult,
    pub computed_at: DateTime<Utc>,
}
