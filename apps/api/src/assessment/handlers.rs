//! Axum route handlers for the Assessment API.

use std::collections::HashMap;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::assessment::derived::derive_profile;
use crate::assessment::ocean::{aggregate_ocean, count_recognized};
use crate::assessment::questions::Question;
use crate::errors::AppError;
use crate::insights::report::{build_report, ProfileReport};
use crate::models::responses::ResponseSet;
use crate::models::scores::OceanScores;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub count: usize,
    pub questions: Vec<Question>,
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub responses: HashMap<String, i64>,
}

#[derive(Debug, Serialize)]
pub struct ScoredProfile {
    pub assessment_id: Uuid,
    pub scored_at: DateTime<Utc>,
    /// Responses matched to a known question.
    pub answered: usize,
    /// Responses with unknown question ids, skipped by the aggregator.
    pub ignored: usize,
    pub report: ProfileReport,
}

#[derive(Debug, Deserialize)]
pub struct DescribeRequest {
    pub ocean: OceanScores,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/questions
pub async fn handle_list_questions(State(state): State<AppState>) -> Json<QuestionListResponse> {
    let questions = state.question_bank.questions().to_vec();
    Json(QuestionListResponse {
        count: questions.len(),
        questions,
    })
}

/// GET /api/v1/questions/:id
pub async fn handle_get_question(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Question>, AppError> {
    state
        .question_bank
        .lookup(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Question {id} not found")))
}

/// POST /api/v1/assessments/score
///
/// Raw responses → OCEAN → culture/values → full profile report.
/// Unknown question ids are ignored; out-of-range answers are rejected.
pub async fn handle_score_assessment(
    State(state): State<AppState>,
    payload: Result<Json<ScoreRequest>, JsonRejection>,
) -> Result<Json<ScoredProfile>, AppError> {
    let Json(request) = payload?;
    let responses = ResponseSet::from_raw(request.responses)?;
    if responses.is_empty() {
        debug!("Empty response set; every dimension scores 0");
    }

    let ocean = aggregate_ocean(&state.question_bank, &responses);
    let answered = count_recognized(&state.question_bank, &responses);
    let ignored = responses.len() - answered;
    debug!("Scored assessment: {answered} answered, {ignored} ignored");

    Ok(Json(ScoredProfile {
        assessment_id: Uuid::new_v4(),
        scored_at: Utc::now(),
        answered,
        ignored,
        report: build_report(&derive_profile(ocean)),
    }))
}

/// POST /api/v1/profiles/describe
///
/// Builds the report from OCEAN scores that were computed earlier.
pub async fn handle_describe_profile(
    payload: Result<Json<DescribeRequest>, JsonRejection>,
) -> Result<Json<ProfileReport>, AppError> {
    let Json(request) = payload?;
    if let Some((dimension, score)) = request.ocean.out_of_range() {
        return Err(AppError::Validation(format!(
            "{} score must be 0-100, got {score}",
            dimension.name()
        )));
    }
    Ok(Json(build_report(&derive_profile(request.ocean))))
}
