//! Shared mock infrastructure for unit tests.
//!
//! Provides canned [`CommandRunner`] implementations so each test file
//! doesn't have to re-define the same boilerplate.

#![allow(clippy::expect_used)]

use std::sync::Mutex;

use spf_survey::application::ports::{CapturedOutput, CommandRunner, RunOptions};
use spf_survey::domain::RunError;

// ── Canned runner ─────────────────────────────────────────────────────────────

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

// ── Recording runner ──────────────────────────────────────────────────────────

/// Records every invocation (program + argument vector) and replies with
/// fixed text.
pub struct RecordingRunner {
    calls: Mutex<Vec<(String, Vec<String>)>>,
    reply: &'static str,
}

impl RecordingRunner {
    pub fn new(reply: &'static str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            reply,
        }
    }

    pub fn recorded_calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls.lock().expect("mutex poisoned").clone()
    }
}

impl CommandRunner for RecordingRunner {
    async fn run(
        &self,
        program: &str,
        args: &[&str],
        _: &RunOptions,
    ) -> Result<CapturedOutput, RunError> {
        self.calls.lock().expect("mutex poisoned").push((
            program.to_string(),
            args.iter().map(ToString::to_string).collect(),
        ));
        Ok(CapturedOutput {
            text: self.reply.to_string(),
        })
    }
}

// ── Launch-failure runner ─────────────────────────────────────────────────────

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
