use axum::Json;
use serde::Deserialize;

use crate::questionnaire::average::Answers;
use crate::questionnaire::{score_questionnaire, QuestionnaireScores};

#[derive(Debug, Deserialize)]
pub struct ScoreAnswersRequest {
    pub answers: Answers,
}

/// POST /api/v1/questionnaire/score
///
/// Raw 1–5 answers in, per-axis competency and culture scores out. Axes with
/// no usable answer are omitted from the maps.
pub async fn handle_score_answers(
    Json(request): Json<ScoreAnswersRequest>,
) -> Json<QuestionnaireScores> {
    Json(score_questionnaire(&request.answers))
}
