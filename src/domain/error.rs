//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::server`,
//! `tokio`, or `std::process`. All error types implement `thiserror::Error`
//! and convert to `anyhow::Error` via the `?` operator.

use std::time::Duration;

use thiserror::Error;

// ── Survey errors ─────────────────────────────────────────────────────────────

/// Failures surfaced to the request handler while serving one survey.
///
/// Empty checker output is not an error — the handler renders it as an
/// informational notice.
#[derive(Debug, Error)]
pub enum SurveyError {
    #[error("Invalid domain format.")]
    InvalidDomainFormat,

    #[error(transparent)]
    Run(#[from] RunError),
}

// ── Runner errors ─────────────────────────────────────────────────────────────

/// Failures from invoking the external SPF checker.
///
/// `Launch` means the program is missing or unexecutable — a deployment
/// problem, distinct from a checker that ran and found nothing.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("failed to start '{program}'")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program}' timed out after {}s", timeout.as_secs())]
    Timeout { program: String, timeout: Duration },

    #[error("failed waiting for '{program}'")]
    Wait {
        program: String,
        #[source]
        source: std::io::Error,
    },
}
