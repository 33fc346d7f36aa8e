use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Questionnaire scores keyed by axis or dimension code, each on the 1–5 scale.
///
/// Keys are plain strings so that codes added later in the forms never break
/// deserialization of older rows.
pub type ScoreMap = BTreeMap<String, f64>;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Competency {
    Communication,
    AnalyticalThinking,
    Creativity,
    Determination,
    Adaptability,
}

impl Competency {
    /// Canonical axis order. Detail rows and narrative truncation follow it.
    pub const ALL: [Competency; 5] = [
        Competency::Communication,
        Competency::AnalyticalThinking,
        Competency::Creativity,
        Competency::Determination,
        Competency::Adaptability,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Competency::Communication => "communication",
            Competency::AnalyticalThinking => "analytical_thinking",
            Competency::Creativity => "creativity",
            Competency::Determination => "determination",
            Competency::Adaptability => "adaptability",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Competency::Communication => "communication",
            Competency::AnalyticalThinking => "analytical thinking",
            Competency::Creativity => "creativity",
            Competency::Determination => "determination",
            Competency::Adaptability => "adaptability",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CultureDimension {
    pub code: &'static str,
    pub label: &'static str,
}

/// Canonical culture dimensions, in display order.
pub const CULTURE_DIMENSIONS: &[CultureDimension] = &[
    CultureDimension {
        code: "relation",
        label: "relationships and collaboration",
    },
    CultureDimension {
        code: "flexibility",
        label: "flexibility and innovation",
    },
    CultureDimension {
        code: "results",
        label: "results and goals",
    },
    CultureDimension {
        code: "stability",
        label: "stability and structure",
    },
    CultureDimension {
        code: "autonomy",
        label: "autonomy and work style",
    },
    CultureDimension {
        code: "work_life_balance",
        label: "work-life balance",
    },
];

/// Human-readable label for a culture code; unknown codes label themselves.
pub fn culture_label(code: &str) -> &str {
    CULTURE_DIMENSIONS
        .iter()
        .find(|d| d.code == code)
        .map_or(code, |d| d.label)
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CandidateAdditionalData {
    pub industry: Option<String>,
    /// Years-of-experience bucket, e.g. `"2-4"`.
    pub experience: Option<String>,
    pub position_level: Option<String>,
    /// Raw `yes` / `no` / `open` answer; parsed by the formal-criteria scorer.
    pub wants_industry_change: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(default)]
    pub competency_scores: ScoreMap,
    #[serde(default)]
    pub culture_scores: ScoreMap,
    #[serde(default)]
    pub additional_data: CandidateAdditionalData,
    #[serde(default)]
    pub tests_completed: bool,
}

impl CandidateProfile {
    pub fn is_matchable(&self) -> bool {
        self.tests_completed
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployerProfile {
    pub user_id: Uuid,
    pub company_name: String,
    #[serde(default)]
    pub culture_scores: ScoreMap,
    #[serde(default)]
    pub profile_completed: bool,
    #[serde(default)]
    pub culture_completed: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OfferRequirements {
    pub industry: Option<String>,
    pub required_experience: Option<String>,
    pub position_level: Option<String>,
    /// Industries accepted in addition to `industry` (0–3 in practice).
    pub accepted_industries: Vec<String>,
    /// Free-text role description. Displayed, never scored.
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobOffer {
    /// `None` when scoring an employer's requirements outside a stored offer.
    #[serde(default)]
    pub id: Option<Uuid>,
    pub employer_id: Uuid,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub competency_requirements: ScoreMap,
    #[serde(default)]
    pub requirements: OfferRequirements,
    #[serde(default)]
    pub requirements_completed: bool,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_competency_order_is_canonical() {
        let codes: Vec<_> = Competency::ALL.iter().map(|c| c.code()).collect();
        assert_eq!(
            codes,
            vec![
                "communication",
                "analytical_thinking",
                "creativity",
                "determination",
                "adaptability"
            ]
        );
    }

    #[test]
    fn test_competency_serde_matches_code() {
        for competency in Competency::ALL {
            let value = serde_json::to_value(competency).unwrap();
            assert_eq!(value, json!(competency.code()));
        }
    }

    #[test]
    fn test_candidate_deserializes_with_missing_sections() {
        let candidate: CandidateProfile = serde_json::from_value(json!({
            "id": "6f1c1f3e-1e57-4c55-9a3f-0b7f9e0e4a11",
            "user_id": "0d2f5c1a-0b9a-4b0e-8a6d-2d1f9b3c7e22"
        }))
        .unwrap();
        assert!(candidate.competency_scores.is_empty());
        assert!(candidate.culture_scores.is_empty());
        assert_eq!(candidate.additional_data, CandidateAdditionalData::default());
        assert!(!candidate.is_matchable());
    }

    #[test]
    fn test_offer_defaults_to_active() {
        let offer: JobOffer = serde_json::from_value(json!({
            "employer_id": "0d2f5c1a-0b9a-4b0e-8a6d-2d1f9b3c7e22"
        }))
        .unwrap();
        assert!(offer.is_active);
        assert!(offer.id.is_none());
        assert!(offer.requirements.accepted_industries.is_empty());
    }

    #[test]
    fn test_culture_label_falls_back_to_code() {
        assert_eq!(culture_label("work_life_balance"), "work-life balance");
        assert_eq!(culture_label("ambition"), "ambition");
    }

    #[test]
    fn test_culture_dimension_codes_are_unique() {
        let mut codes: Vec<_> = CULTURE_DIMENSIONS.iter().map(|d| d.code).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), 6);
    }
}
