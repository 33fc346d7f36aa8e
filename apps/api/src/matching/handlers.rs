//! Axum route handlers for the Matching API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::dimension::{SCALE_MAX, SCALE_MIN};
use crate::matching::engine::compute_match;
use crate::matching::runner::{run_matching, MatchTrigger, RunSummary};
use crate::models::match_result::{MatchResult, StoredMatch};
use crate::models::profile::{CandidateProfile, EmployerProfile, JobOffer, ScoreMap};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    pub candidate: CandidateProfile,
    pub employer: EmployerProfile,
    pub offer: JobOffer,
}

#[derive(Debug, Deserialize)]
pub struct MatchQuery {
    pub candidate_id: Option<Uuid>,
    pub employer_id: Option<Uuid>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/matching/run
///
/// Full recompute: every completed candidate against every active offer.
pub async fn handle_run_all(State(state): State<AppState>) -> Result<Json<RunSummary>, AppError> {
    trigger(&state, MatchTrigger::All).await
}

/// POST /api/v1/matching/candidates/:id/run
pub async fn handle_run_candidate(
    State(state): State<AppState>,
    Path(candidate_id): Path<Uuid>,
) -> Result<Json<RunSummary>, AppError> {
    trigger(&state, MatchTrigger::Candidate(candidate_id)).await
}

/// POST /api/v1/matching/employers/:id/run
pub async fn handle_run_employer(
    State(state): State<AppState>,
    Path(employer_id): Path<Uuid>,
) -> Result<Json<RunSummary>, AppError> {
    trigger(&state, MatchTrigger::Employer(employer_id)).await
}

/// POST /api/v1/matching/offers/:id/run
pub async fn handle_run_offer(
    State(state): State<AppState>,
    Path(offer_id): Path<Uuid>,
) -> Result<Json<RunSummary>, AppError> {
    trigger(&state, MatchTrigger::Offer(offer_id)).await
}

async fn trigger(state: &AppState, trigger: MatchTrigger) -> Result<Json<RunSummary>, AppError> {
    let summary = run_matching(state.store.as_ref(), &state.weights, trigger).await?;
    Ok(Json(summary))
}

/// POST /api/v1/matching/preview
///
/// Scores the supplied records without storing anything. Completion flags are
/// not checked here; the caller asked for this pair explicitly.
pub async fn handle_preview(
    State(state): State<AppState>,
    Json(request): Json<PreviewRequest>,
) -> Result<Json<MatchResult>, AppError> {
    if request.offer.employer_id != request.employer.user_id {
        return Err(AppError::Validation(
            "offer.employer_id must match employer.user_id".to_string(),
        ));
    }
    validate_scale("candidate.competency_scores", &request.candidate.competency_scores)?;
    validate_scale("candidate.culture_scores", &request.candidate.culture_scores)?;
    validate_scale("employer.culture_scores", &request.employer.culture_scores)?;
    validate_scale(
        "offer.competency_requirements",
        &request.offer.competency_requirements,
    )?;

    Ok(Json(compute_match(
        &request.candidate,
        &request.employer,
        &request.offer,
        &state.weights,
    )))
}

/// GET /api/v1/matches?candidate_id=...&employer_id=...
///
/// Stored results, best overall score first. At least one filter is required.
pub async fn handle_list_matches(
    State(state): State<AppState>,
    Query(query): Query<MatchQuery>,
) -> Result<Json<Vec<StoredMatch>>, AppError> {
    let matches = match (query.candidate_id, query.employer_id) {
        (Some(candidate_id), employer_id) => {
            let mut matches = state.store.matches_for_candidate(candidate_id).await?;
            if let Some(employer_id) = employer_id {
                matches.retain(|m| m.result.employer_id == employer_id);
            }
            matches
        }
        (None, Some(employer_id)) => state.store.matches_for_employer(employer_id).await?,
        (None, None) => {
            return Err(AppError::Validation(
                "candidate_id or employer_id is required".to_string(),
            ))
        }
    };
    Ok(Json(matches))
}

fn validate_scale(field: &str, scores: &ScoreMap) -> Result<(), AppError> {
    match scores
        .iter()
        .find(|(_, v)| !(SCALE_MIN..=SCALE_MAX).contains(*v))
    {
        Some((code, value)) => Err(AppError::Validation(format!(
            "{field}.{code} must be between {SCALE_MIN} and {SCALE_MAX} (got {value})"
        ))),
        None => Ok(()),
    }
}
