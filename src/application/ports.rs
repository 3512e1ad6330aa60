//! Port trait definitions for the application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`
//! or `crate::server`.

use std::future::Future;
use std::time::Duration;

use crate::domain::RunError;

// ── Constants ─────────────────────────────────────────────────────────────────

/// Default hard bound on one checker invocation.
pub const DEFAULT_RUN_TIMEOUT: Duration = Duration::from_secs(30);

/// `TERM` value handed to the checker so it colorizes consistently when
/// not attached to a real terminal.
pub const DEFAULT_TERM: &str = "xterm";

// ── Value Types ───────────────────────────────────────────────────────────────

/// Per-invocation options for the external command.
///
/// The environment travels with the call — the runner never mutates the
/// process-global environment.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Hard bound on the child's runtime; the process is killed when it
    /// fires.
    pub timeout: Duration,
    /// Environment variables set on the child only.
    pub env: Vec<(String, String)>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_RUN_TIMEOUT,
            env: vec![("TERM".to_string(), DEFAULT_TERM.to_string())],
        }
    }
}

/// Output captured from one invocation, stdout and stderr merged into a
/// single text stream (stdout first). May be empty; may contain ANSI
/// escape sequences.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedOutput {
    pub text: String,
}

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
///
/// The method is declared with an explicitly `Send` future so services
/// built on the port stay usable from the multi-threaded server runtime;
/// implementations just write `async fn run`.
pub trait CommandRunner {
    /// Run `program` with `args` as an argument vector (no shell) and
    /// capture its merged output in full.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Launch`] if the process cannot be spawned and
    /// [`RunError::Timeout`] if it outlives `opts.timeout`. On timeout
    /// the child must be killed, not left orphaned.
    fn run(
        &self,
        program: &str,
        args: &[&str],
        opts: &RunOptions,
    ) -> impl Future<Output = Result<CapturedOutput, RunError>> + Send;
}

/// A shared reference to a runner is itself a runner, so services can
/// borrow a runner the test still owns.
impl<T: CommandRunner + Sync> CommandRunner for &T {
    async fn run(
        &self,
        program: &str,
        args: &[&str],
        opts: &RunOptions,
    ) -> Result<CapturedOutput, RunError> {
        (**self).run(program, args, opts).await
    }
}
