//! SPF Survey server entry point.
//!
//! Initialises tracing, loads configuration from environment variables
//! (prefixed with `SPF_SURVEY_`), and serves the survey form over HTTP.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use spf_survey::application::ports::RunOptions;
use spf_survey::application::survey::SurveyService;
use spf_survey::infra::{Config, TokioCommandRunner};
use spf_survey::output::PageRenderer;
use spf_survey::server::{self, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialise tracing with RUST_LOG env filter.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("spf-survey starting");

    // 2. Load configuration from SPF_SURVEY_* env vars.
    let config = Config::from_env().context("failed to load config from SPF_SURVEY_* env vars")?;

    tracing::info!(
        listen_addr = %config.listen_addr,
        command = %config.command,
        timeout_secs = config.timeout_secs,
        term = %config.term,
        "configuration loaded",
    );

    // 3. Build the shared state: one service around the tokio-backed
    //    runner, one page renderer.
    let options = RunOptions {
        timeout: config.timeout(),
        env: vec![("TERM".to_string(), config.term.clone())],
    };
    let state = Arc::new(AppState {
        service: SurveyService::new(TokioCommandRunner, config.command.clone(), options),
        pages: PageRenderer::new(),
    });

    // 4. Bind and serve.
    let router = server::router(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;

    tracing::info!("survey form ready — http://{}/", config.listen_addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    tracing::info!("spf-survey shut down");
    Ok(())
}

/// Wait for SIGINT (Ctrl-C) for graceful shutdown.
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install Ctrl-C handler");
    tracing::info!("received shutdown signal");
}
