//! Shared helpers for integration tests.

#![allow(clippy::expect_used)]

use std::io::Write;
use std::os::unix::fs::PermissionsExt;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tempfile::{NamedTempFile, TempPath};
use tower::ServiceExt;

use spf_survey::application::ports::{CapturedOutput, CommandRunner, RunOptions};
use spf_survey::application::survey::SurveyService;
use spf_survey::domain::RunError;
use spf_survey::output::PageRenderer;
use spf_survey::server::{self, AppState};

// ── Canned runners ────────────────────────────────────────────────────────────

/// Replies with fixed text for every invocation.
pub struct CannedRunner(pub &'static str);

impl CommandRunner for CannedRunner {
    async fn run(
        &self,
        _: &str,
        _: &[&str],
        _: &RunOptions,
    ) -> Result<CapturedOutput, RunError> {
        Ok(CapturedOutput {
            text: self.0.to_string(),
        })
    }
}

/// Fails every invocation as if the checker were missing from disk.
pub struct LaunchFailRunner;

impl CommandRunner for LaunchFailRunner {
    async fn run(
        &self,
        program: &str,
        _: &[&str],
        _: &RunOptions,
    ) -> Result<CapturedOutput, RunError> {
        Err(RunError::Launch {
            program: program.to_string(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        })
    }
}

/// Panics if the checker is ever invoked.
pub struct UnreachableRunner;

impl CommandRunner for UnreachableRunner {
    async fn run(
        &self,
        _: &str,
        _: &[&str],
        _: &RunOptions,
    ) -> Result<CapturedOutput, RunError> {
        panic!("checker must not be invoked for this request")
    }
}

// ── Router and request helpers ────────────────────────────────────────────────

/// Build the application router around the given runner.
pub fn router_with<R>(runner: R) -> Router
where
    R: CommandRunner + Send + Sync + 'static,
{
    let state = Arc::new(AppState {
        service: SurveyService::new(runner, "./spf.sh", RunOptions::default()),
        pages: PageRenderer::new(),
    });
    server::router(state)
}

/// Drive one GET request through the router; returns status and body.
pub async fn get(router: Router, uri: &str) -> (StatusCode, String) {
    let response = router
        .oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router is infallible");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    (status, String::from_utf8(bytes.to_vec()).expect("utf-8 body"))
}

// ── Script helper ─────────────────────────────────────────────────────────────

/// Write an executable `/bin/sh` script and return its path; the file is
/// removed on drop, so callers must keep the handle alive while the
/// script runs. The write handle is closed before returning — execve
/// refuses a file that is still open for writing (ETXTBSY).
pub fn script(body: &str) -> TempPath {
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(file, "#!/bin/sh").expect("write shebang");
    file.write_all(body.as_bytes()).expect("write body");
    file.flush().expect("flush");
    let path = file.into_temp_path();

    let mut perms = std::fs::metadata(&path).expect("metadata").permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).expect("chmod");
    path
}
