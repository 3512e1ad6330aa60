//! Survey use-case — validate the submitted domain, run the checker.
//!
//! Depends only on `crate::domain` and the port traits; rendering is the
//! presentation layer's job.

use crate::application::ports::{CapturedOutput, CommandRunner, RunOptions};
use crate::domain::{SurveyError, ValidatedDomain};

/// What one submitted domain produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurveyOutcome {
    /// Non-empty checker output, raw (ANSI escapes intact).
    Report(CapturedOutput),
    /// The checker ran and wrote nothing. Informational, not an error.
    NoResults,
}

/// Orchestrates one survey request against the configured checker.
///
/// Generic over the runner so tests can substitute canned doubles
/// without spawning processes.
pub struct SurveyService<R> {
    runner: R,
    command: String,
    options: RunOptions,
}

impl<R: CommandRunner> SurveyService<R> {
    pub fn new(runner: R, command: impl Into<String>, options: RunOptions) -> Self {
        Self {
            runner,
            command: command.into(),
            options,
        }
    }

    /// Path to the checker this service invokes.
    #[must_use]
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Validate `raw_domain`, then invoke the checker with the validated
    /// domain as its single argument.
    ///
    /// The checker's exit status is not inspected — diagnostic text on
    /// either stream is the result, and an empty capture maps to
    /// [`SurveyOutcome::NoResults`].
    ///
    /// # Errors
    ///
    /// [`SurveyError::InvalidDomainFormat`] if validation fails (the
    /// checker is never invoked), or a [`SurveyError::Run`] wrapping the
    /// runner failure.
    pub async fn survey(&self, raw_domain: &str) -> Result<SurveyOutcome, SurveyError> {
        let domain = ValidatedDomain::parse(raw_domain)?;
        let output = self
            .runner
            .run(&self.command, &[domain.as_str()], &self.options)
            .await?;
        if output.text.is_empty() {
            return Ok(SurveyOutcome::NoResults);
        }
        Ok(SurveyOutcome::Report(output))
    }
}
