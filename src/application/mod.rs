//! Application layer — port trait definitions and use-case orchestration.
//!
//! This module depends only on `crate::domain` — never on `crate::infra`,
//! `crate::output`, or `crate::server`.

pub mod ports;
pub mod survey;

pub use ports::{CapturedOutput, CommandRunner, RunOptions, DEFAULT_RUN_TIMEOUT, DEFAULT_TERM};
pub use survey::{SurveyOutcome, SurveyService};
