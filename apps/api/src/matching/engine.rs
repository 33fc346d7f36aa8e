//! Single entry point for scoring one candidate against one employer offer.
//!
//! Every trigger (batch, single candidate, single employer/offer) and the
//! preview endpoint go through `compute_match`, so there is exactly one rule set.

use tracing::debug;

use crate::matching::competence::score_competence;
use crate::matching::culture::score_culture;
use crate::matching::formal::score_extra;
use crate::matching::narrative::{generate_risks, generate_strengths};
use crate::matching::weights::{round_percent, ScoringWeights};
use crate::models::match_result::MatchResult;
use crate::models::profile::{CandidateProfile, EmployerProfile, JobOffer};

/// Culture is compared against the employer profile; competencies and formal
/// criteria against the offer.
pub fn compute_match(
    candidate: &CandidateProfile,
    employer: &EmployerProfile,
    offer: &JobOffer,
    weights: &ScoringWeights,
) -> MatchResult {
    let competence = score_competence(&candidate.competency_scores, &offer.competency_requirements);
    let culture = score_culture(&candidate.culture_scores, &employer.culture_scores);
    let extra = score_extra(&candidate.additional_data, &offer.requirements);

    let overall_score = weights.aggregate(competence.percent, culture.percent, extra.percent);

    let strengths = generate_strengths(&competence.details, &culture.details, &extra.details);
    let risks = generate_risks(&competence.details, &culture.details);

    debug!(
        candidate_id = %candidate.id,
        employer_id = %employer.user_id,
        overall_score,
        competence = competence.percent,
        culture = culture.percent,
        extra = extra.percent,
        "Scored candidate against offer"
    );

    MatchResult {
        candidate_id: candidate.id,
        employer_id: employer.user_id,
        job_offer_id: offer.id,
        overall_score,
        competence_score: round_percent(competence.percent),
        culture_score: round_percent(culture.percent),
        extra_score: round_percent(extra.percent),
        competence_details: competence.details,
        culture_details: culture.details,
        extra_details: extra.details,
        strengths,
        risks,
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use uuid::Uuid;

    use crate::models::profile::{
        CandidateAdditionalData, CandidateProfile, EmployerProfile, JobOffer, OfferRequirements,
        ScoreMap,
    };

    pub fn scores(pairs: &[(&str, f64)]) -> ScoreMap {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    /// All-5 candidate in IT, 2-4 years, Specialist, not open to change.
    pub fn candidate() -> CandidateProfile {
        CandidateProfile {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            competency_scores: scores(&[
                ("communication", 5.0),
                ("analytical_thinking", 5.0),
                ("creativity", 5.0),
                ("determination", 5.0),
                ("adaptability", 5.0),
            ]),
            culture_scores: scores(&[("relation", 3.0)]),
            additional_data: CandidateAdditionalData {
                industry: Some("IT".to_string()),
                experience: Some("2-4".to_string()),
                position_level: Some("Specialist".to_string()),
                wants_industry_change: Some("no".to_string()),
            },
            tests_completed: true,
        }
    }

    pub fn employer() -> EmployerProfile {
        EmployerProfile {
            user_id: Uuid::new_v4(),
            company_name: "Acme".to_string(),
            culture_scores: scores(&[("relation", 3.0)]),
            profile_completed: true,
            culture_completed: true,
        }
    }

    /// All-3 requirements matching the candidate's formal data.
    pub fn offer(employer_id: Uuid) -> JobOffer {
        JobOffer {
            id: Some(Uuid::new_v4()),
            employer_id,
            title: Some("Backend developer".to_string()),
            competency_requirements: scores(&[
                ("communication", 3.0),
                ("analytical_thinking", 3.0),
                ("creativity", 3.0),
                ("determination", 3.0),
                ("adaptability", 3.0),
            ]),
            requirements: OfferRequirements {
                industry: Some("IT".to_string()),
                required_experience: Some("2-4".to_string()),
                position_level: Some("Specialist".to_string()),
                accepted_industries: vec![],
                description: Some("Build and run services".to_string()),
            },
            requirements_completed: true,
            is_active: true,
        }
    }
}
