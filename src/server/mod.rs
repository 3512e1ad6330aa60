//! HTTP surface — axum router and the survey request handler.
//!
//! The handler walks the request through its states: Idle (no `d`
//! parameter), Validating, Running, Transcoding, Rendered — or Rejected
//! when validation fails. Every response is a 200 HTML document; nothing
//! internal reaches the client.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use crate::application::ports::CommandRunner;
use crate::application::survey::{SurveyOutcome, SurveyService};
use crate::domain::SurveyError;
use crate::output::ansi;
use crate::output::page::{PageBody, PageRenderer};

/// Shared per-process state; read-only after startup, so concurrent
/// requests need no locking.
pub struct AppState<R> {
    pub service: SurveyService<R>,
    pub pages: PageRenderer,
}

/// Query parameters of the survey form.
#[derive(Debug, Deserialize)]
pub struct SurveyQuery {
    /// Raw domain as typed by the user; absent on first load.
    d: Option<String>,
}

/// Compose the application router:
///   - `/`       → the survey form and result page
///   - `/health` → liveness probe for container orchestration
pub fn router<R>(state: Arc<AppState<R>>) -> Router
where
    R: CommandRunner + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(survey::<R>))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Minimal health-check handler for Docker / load-balancer probes.
async fn health() -> StatusCode {
    StatusCode::OK
}

async fn survey<R>(
    State(state): State<Arc<AppState<R>>>,
    Query(query): Query<SurveyQuery>,
) -> Html<String>
where
    R: CommandRunner + Send + Sync,
{
    let Some(raw) = query.d else {
        return Html(state.pages.render("", &PageBody::Empty));
    };

    let body = match state.service.survey(&raw).await {
        Ok(SurveyOutcome::Report(output)) => {
            tracing::info!(domain = %raw.trim(), bytes = output.text.len(), "survey rendered");
            PageBody::Report(ansi::ansi_to_html(&output.text))
        }
        Ok(SurveyOutcome::NoResults) => {
            tracing::info!(domain = %raw.trim(), "survey produced no output");
            PageBody::NoResults
        }
        Err(SurveyError::InvalidDomainFormat) => {
            tracing::warn!(input = %raw, "invalid domain format");
            PageBody::InvalidDomain
        }
        Err(SurveyError::Run(err)) => {
            // Broken deployment or hung checker: loud in the logs, but
            // the client sees the same notice as a clean negative result.
            tracing::error!(error = %err, command = %state.service.command(), "spf checker failed");
            PageBody::NoResults
        }
    };

    Html(state.pages.render(&raw, &body))
}
