//! Templated strengths and risks derived from already-computed detail rows.
//! Deterministic: same rows, same sentences, same order.

use crate::models::match_result::{
    CompetenceDetail, CompetenceStatus, CultureDetail, CultureStatus, ExtraDetail,
};
use crate::models::profile::culture_label;

const MAX_COMPETENCY_SENTENCES: usize = 2;
const ALIGNED_DIMENSIONS_FOR_STRENGTH: usize = 3;

/// Competency sentences first, then the culture summary, then the formal one.
pub fn generate_strengths(
    competence: &[CompetenceDetail],
    culture: &[CultureDetail],
    extra: &[ExtraDetail],
) -> Vec<String> {
    let mut strengths: Vec<String> = competence
        .iter()
        .filter(|d| d.status == CompetenceStatus::Excellent)
        .take(MAX_COMPETENCY_SENTENCES)
        .map(|d| {
            format!(
                "Strong fit in {} with what the role expects.",
                d.competency.label()
            )
        })
        .collect();

    let aligned = culture
        .iter()
        .filter(|d| d.status == CultureStatus::Aligned)
        .count();
    if aligned >= ALIGNED_DIMENSIONS_FOR_STRENGTH {
        strengths.push(format!(
            "Shares the organization's values on {aligned} culture dimensions."
        ));
    }

    if !extra.is_empty() && extra.iter().all(|d| d.matched) {
        strengths.push("Meets all formal requirements of the offer.".to_string());
    }

    strengths
}

pub fn generate_risks(competence: &[CompetenceDetail], culture: &[CultureDetail]) -> Vec<String> {
    let mut risks: Vec<String> = competence
        .iter()
        .filter(|d| d.status == CompetenceStatus::NeedsWork)
        .take(MAX_COMPETENCY_SENTENCES)
        .map(|d| {
            format!(
                "Noticeable gap in {} relative to the role's expectations.",
                d.competency.label()
            )
        })
        .collect();

    if let Some(first) = culture.iter().find(|d| d.status == CultureStatus::Divergent) {
        risks.push(format!(
            "Workplace culture expectations differ from the organization's, notably on {}.",
            culture_label(&first.dimension)
        ));
    }

    risks
}
