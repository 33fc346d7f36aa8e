pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::matching::handlers as matching;
use crate::questionnaire::handlers as questionnaire;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Matching runs
        .route("/api/v1/matching/run", post(matching::handle_run_all))
        .route(
            "/api/v1/matching/candidates/:id/run",
            post(matching::handle_run_candidate),
        )
        .route(
            "/api/v1/matching/employers/:id/run",
            post(matching::handle_run_employer),
        )
        .route(
            "/api/v1/matching/offers/:id/run",
            post(matching::handle_run_offer),
        )
        .route("/api/v1/matching/preview", post(matching::handle_preview))
        // Stored results
        .route("/api/v1/matches", get(matching::handle_list_matches))
        // Questionnaire
        .route(
            "/api/v1/questionnaire/score",
            post(questionnaire::handle_score_answers),
        )
        .with_state(state)
}
