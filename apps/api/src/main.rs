mod assessment;
mod comparison;
mod config;
mod errors;
mod insights;
mod models;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::assessment::questions::QuestionBank;
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CultureFit API v{}", env!("CARGO_PKG_VERSION"));

    // Question bank: custom file if configured, otherwise the built-in 40 items
    let question_bank = match &config.question_bank_path {
        Some(path) => {
            let bank = QuestionBank::load(path)?;
            info!("Loaded {} questions from {}", bank.len(), path.display());
            bank
        }
        None => {
            let bank = QuestionBank::builtin();
            info!("Using built-in question bank ({} questions)", bank.len());
            bank
        }
    };

    let state = AppState::new(question_bank);

    let mut app = build_router(state).layer(TraceLayer::new_for_http());
    if config.cors_permissive {
        app = app.layer(CorsLayer::permissive());
    }

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
