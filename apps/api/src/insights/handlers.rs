//! Axum route handlers for the Insights API.

use axum::{extract::rejection::JsonRejection, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::insights::bands::{classify, Band, BandScheme};
use crate::models::scores::MAX_SCORE;

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub score: u8,
    pub scheme: BandScheme,
}

#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub score: u8,
    pub band: Band,
    pub label: &'static str,
}

/// POST /api/v1/bands/classify
pub async fn handle_classify(
    payload: Result<Json<ClassifyRequest>, JsonRejection>,
) -> Result<Json<ClassifyResponse>, AppError> {
    let Json(request) = payload?;
    if request.score > MAX_SCORE {
        return Err(AppError::Validation(format!(
            "score must be 0-100, got {}",
            request.score
        )));
    }
    let band = classify(request.score, request.scheme);
    Ok(Json(ClassifyResponse {
        score: request.score,
        band,
        label: band.label(),
    }))
}
