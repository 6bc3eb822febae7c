pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assessment::handlers as assessment;
use crate::comparison::handlers as comparison;
use crate::insights::handlers as insights;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Assessment API
        .route("/api/v1/questions", get(assessment::handle_list_questions))
        .route("/api/v1/questions/:id", get(assessment::handle_get_question))
        .route(
            "/api/v1/assessments/score",
            post(assessment::handle_score_assessment),
        )
        .route(
            "/api/v1/profiles/describe",
            post(assessment::handle_describe_profile),
        )
        // Insights API
        .route("/api/v1/bands/classify", post(insights::handle_classify))
        // Comparison API
        .route("/api/v1/teams/summary", post(comparison::handle_team_summary))
        .route(
            "/api/v1/candidates/fit",
            post(comparison::handle_candidate_fit),
        )
        .with_state(state)
}
