//! Persistence seam for the matching runner.
//!
//! `MatchStore` is carried in `AppState` as `Arc<dyn MatchStore>`; the runner
//! and handlers never touch SQL directly. `PgMatchStore` is the production
//! backend.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use thiserror::Error;
use tracing::instrument;
use uuid::Uuid;

use crate::models::match_result::{
    CompetenceDetail, CultureDetail, ExtraDetail, MatchResult, StoredMatch,
};
use crate::models::profile::{
    CandidateAdditionalData, CandidateProfile, EmployerProfile, JobOffer, OfferRequirements,
    ScoreMap,
};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Which offers a run should load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfferScope {
    All,
    Employer(Uuid),
    Offer(Uuid),
}

#[async_trait]
pub trait MatchStore: Send + Sync {
    /// All candidates, or just `only`. Includes candidates that are not yet
    /// matchable so the runner can report why they were skipped.
    async fn load_candidates(&self, only: Option<Uuid>)
        -> Result<Vec<CandidateProfile>, StoreError>;

    /// Offers in scope, active or not.
    async fn load_offers(&self, scope: OfferScope) -> Result<Vec<JobOffer>, StoreError>;

    async fn load_employers(&self, ids: &[Uuid]) -> Result<Vec<EmployerProfile>, StoreError>;

    /// Insert or replace the result keyed by (employer, candidate, offer).
    async fn upsert_match(&self, result: &MatchResult) -> Result<(), StoreError>;

    async fn matches_for_candidate(
        &self,
        candidate_id: Uuid,
    ) -> Result<Vec<StoredMatch>, StoreError>;

    async fn matches_for_employer(&self, employer_id: Uuid)
        -> Result<Vec<StoredMatch>, StoreError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Postgres backend
// ────────────────────────────────────────────────────────────────────────────

pub struct PgMatchStore {
    pool: PgPool,
}

impl PgMatchStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CandidateRow {
    id: Uuid,
    user_id: Uuid,
    competency_scores: Json<ScoreMap>,
    culture_scores: Json<ScoreMap>,
    additional_data: Json<CandidateAdditionalData>,
    tests_completed: bool,
}

impl From<CandidateRow> for CandidateProfile {
    fn from(row: CandidateRow) -> Self {
        CandidateProfile {
            id: row.id,
            user_id: row.user_id,
            competency_scores: row.competency_scores.0,
            culture_scores: row.culture_scores.0,
            additional_data: row.additional_data.0,
            tests_completed: row.tests_completed,
        }
    }
}

#[derive(Debug, FromRow)]
struct EmployerRow {
    user_id: Uuid,
    company_name: String,
    culture_scores: Json<ScoreMap>,
    profile_completed: bool,
    culture_completed: bool,
}

impl From<EmployerRow> for EmployerProfile {
    fn from(row: EmployerRow) -> Self {
        EmployerProfile {
            user_id: row.user_id,
            company_name: row.company_name,
            culture_scores: row.culture_scores.0,
            profile_completed: row.profile_completed,
            culture_completed: row.culture_completed,
        }
    }
}

#[derive(Debug, FromRow)]
struct OfferRow {
    id: Uuid,
    employer_id: Uuid,
    title: Option<String>,
    competency_requirements: Json<ScoreMap>,
    requirements: Json<OfferRequirements>,
    requirements_completed: bool,
    is_active: bool,
}

impl From<OfferRow> for JobOffer {
    fn from(row: OfferRow) -> Self {
        JobOffer {
            id: Some(row.id),
            employer_id: row.employer_id,
            title: row.title,
            competency_requirements: row.competency_requirements.0,
            requirements: row.requirements.0,
            requirements_completed: row.requirements_completed,
            is_active: row.is_active,
        }
    }
}

#[derive(Debug, FromRow)]
struct MatchResultRow {
    candidate_id: Uuid,
    employer_id: Uuid,
    job_offer_id: Option<Uuid>,
    overall_score: i16,
    competence_score: i16,
    culture_score: i16,
    extra_score: i16,
    competence_details: Json<Vec<CompetenceDetail>>,
    culture_details: Json<Vec<CultureDetail>>,
    extra_details: Json<Vec<ExtraDetail>>,
    strengths: Vec<String>,
    risks: Vec<String>,
    computed_at: DateTime<Utc>,
}

impl From<MatchResultRow> for StoredMatch {
    fn from(row: MatchResultRow) -> Self {
        StoredMatch {
            result: MatchResult {
                candidate_id: row.candidate_id,
                employer_id: row.employer_id,
                job_offer_id: row.job_offer_id,
                overall_score: score_from_db(row.overall_score),
                competence_score: score_from_db(row.competence_score),
                culture_score: score_from_db(row.culture_score),
                extra_score: score_from_db(row.extra_score),
                competence_details: row.competence_details.0,
                culture_details: row.culture_details.0,
                extra_details: row.extra_details.0,
                strengths: row.strengths,
                risks: row.risks,
            },
            computed_at: row.computed_at,
        }
    }
}

fn score_from_db(value: i16) -> u8 {
    value.clamp(0, 100) as u8
}

const MATCH_COLUMNS: &str = r#"
    candidate_id, employer_id, job_offer_id,
    overall_score, competence_score, culture_score, extra_score,
    competence_details, culture_details, extra_details,
    strengths, risks, computed_at
"#;

#[async_trait]
impl MatchStore for PgMatchStore {
    #[instrument(skip(self))]
    async fn load_candidates(
        &self,
        only: Option<Uuid>,
    ) -> Result<Vec<CandidateProfile>, StoreError> {
        let rows = sqlx::query_as::<_, CandidateRow>(
            r#"
            SELECT id, user_id,
                   COALESCE(competency_scores, '{}'::jsonb) AS competency_scores,
                   COALESCE(culture_scores, '{}'::jsonb) AS culture_scores,
                   COALESCE(additional_data, '{}'::jsonb) AS additional_data,
                   tests_completed
            FROM candidate_profiles
            WHERE ($1::uuid IS NULL OR id = $1)
            ORDER BY id
            "#,
        )
        .bind(only)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CandidateProfile::from).collect())
    }

    #[instrument(skip(self))]
    async fn load_offers(&self, scope: OfferScope) -> Result<Vec<JobOffer>, StoreError> {
        let (employer_id, offer_id) = match scope {
            OfferScope::All => (None, None),
            OfferScope::Employer(id) => (Some(id), None),
            OfferScope::Offer(id) => (None, Some(id)),
        };

        let rows = sqlx::query_as::<_, OfferRow>(
            r#"
            SELECT id, employer_id, title,
                   COALESCE(competency_requirements, '{}'::jsonb) AS competency_requirements,
                   COALESCE(requirements, '{}'::jsonb) AS requirements,
                   requirements_completed, is_active
            FROM job_offers
            WHERE ($1::uuid IS NULL OR employer_id = $1)
              AND ($2::uuid IS NULL OR id = $2)
            ORDER BY employer_id, id
            "#,
        )
        .bind(employer_id)
        .bind(offer_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(JobOffer::from).collect())
    }

    #[instrument(skip(self, ids), fields(count = ids.len()))]
    async fn load_employers(&self, ids: &[Uuid]) -> Result<Vec<EmployerProfile>, StoreError> {
        let rows = sqlx::query_as::<_, EmployerRow>(
            r#"
            SELECT user_id, company_name,
                   COALESCE(culture_scores, '{}'::jsonb) AS culture_scores,
                   profile_completed, culture_completed
            FROM employer_profiles
            WHERE user_id = ANY($1)
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(EmployerProfile::from).collect())
    }

    #[instrument(skip(self, result), fields(
        candidate_id = %result.candidate_id,
        employer_id = %result.employer_id,
    ))]
    async fn upsert_match(&self, result: &MatchResult) -> Result<(), StoreError> {
        // Last write wins: a recomputation replaces every score and detail field.
        sqlx::query(
            r#"
            INSERT INTO match_results
                (candidate_id, employer_id, job_offer_id,
                 overall_score, competence_score, culture_score, extra_score,
                 competence_details, culture_details, extra_details,
                 strengths, risks, computed_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, now())
            ON CONFLICT (employer_id, candidate_id, job_offer_id) DO UPDATE SET
                overall_score = EXCLUDED.overall_score,
                competence_score = EXCLUDED.competence_score,
                culture_score = EXCLUDED.culture_score,
                extra_score = EXCLUDED.extra_score,
                competence_details = EXCLUDED.competence_details,
                culture_details = EXCLUDED.culture_details,
                extra_details = EXCLUDED.extra_details,
                strengths = EXCLUDED.strengths,
                risks = EXCLUDED.risks,
                computed_at = EXCLUDED.computed_at
            "#,
        )
        .bind(result.candidate_id)
        .bind(result.employer_id)
        .bind(result.job_offer_id)
        .bind(i16::from(result.overall_score))
        .bind(i16::from(result.competence_score))
        .bind(i16::from(result.culture_score))
        .bind(i16::from(result.extra_score))
        .bind(Json(&result.competence_details))
        .bind(Json(&result.culture_details))
        .bind(Json(&result.extra_details))
        .bind(&result.strengths)
        .bind(&result.risks)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn matches_for_candidate(
        &self,
        candidate_id: Uuid,
    ) -> Result<Vec<StoredMatch>, StoreError> {
        let rows = sqlx::query_as::<_, MatchResultRow>(&format!(
            "SELECT {MATCH_COLUMNS} FROM match_results WHERE candidate_id = $1 \
             ORDER BY overall_score DESC, computed_at DESC"
        ))
        .bind(candidate_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(StoredMatch::from).collect())
    }

    #[instrument(skip(self))]
    async fn matches_for_employer(
        &self,
        employer_id: Uuid,
    ) -> Result<Vec<StoredMatch>, StoreError> {
        let rows = sqlx::query_as::<_, MatchResultRow>(&format!(
            "SELECT {MATCH_COLUMNS} FROM match_results WHERE employer_id = $1 \
             ORDER BY overall_score DESC, computed_at DESC"
        ))
        .bind(employer_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(StoredMatch::from).collect())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory backend for tests
// ────────────────────────────────────────────────────────────────────────────
