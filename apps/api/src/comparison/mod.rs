// Comparison: team aggregation and candidate-vs-team fit scoring.

pub mod fit_scoring;
pub mod handlers;
pub mod team;
