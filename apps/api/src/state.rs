use std::sync::Arc;

use crate::assessment::questions::QuestionBank;
use crate::comparison::fit_scoring::{DistanceFitScorer, FitScorer};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Loaded once at startup; read-only afterwards.
    pub question_bank: Arc<QuestionBank>,
    /// Pluggable candidate fit scorer. Default: DistanceFitScorer.
    pub fit_scorer: Arc<dyn FitScorer>,
}

impl AppState {
    pub fn new(question_bank: QuestionBank) -> Self {
        Self {
            question_bank: Arc::new(question_bank),
            fit_scorer: Arc::new(DistanceFitScorer),
        }
    }
}
