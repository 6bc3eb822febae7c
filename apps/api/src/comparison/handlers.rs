//! Axum route handlers for the Comparison API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;
use tracing::debug;

use crate::comparison::fit_scoring::FitReport;
use crate::comparison::team::{summarize_team, MemberProfile, TeamProfile};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TeamSummaryRequest {
    pub name: String,
    pub members: Vec<MemberProfile>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateFitRequest {
    pub candidate: MemberProfile,
    pub team: Vec<MemberProfile>,
}

/// POST /api/v1/teams/summary
pub async fn handle_team_summary(
    payload: Result<Json<TeamSummaryRequest>, JsonRejection>,
) -> Result<Json<TeamProfile>, AppError> {
    let Json(request) = payload?;
    if request.name.trim().is_empty() {
        return Err(AppError::Validation("name cannot be empty".to_string()));
    }
    let profile = summarize_team(&request.name, &request.members)?;
    debug!(
        "Summarized team '{}' ({} members)",
        profile.name, profile.member_count
    );
    Ok(Json(profile))
}

/// POST /api/v1/candidates/fit
///
/// Compares one candidate with the mean profile of a team.
pub async fn handle_candidate_fit(
    State(state): State<AppState>,
    payload: Result<Json<CandidateFitRequest>, JsonRejection>,
) -> Result<Json<FitReport>, AppError> {
    let Json(request) = payload?;
    let report = state.fit_scorer.score(&request.candidate, &request.team)?;
    debug!(
        "Candidate '{}' fit {} via {}",
        report.candidate, report.overall_score, report.scorer_backend
    );
    Ok(Json(report))
}
