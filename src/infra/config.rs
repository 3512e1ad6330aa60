//! Server configuration loaded from environment variables.

use std::time::Duration;

use serde::Deserialize;

use crate::application::ports::{DEFAULT_RUN_TIMEOUT, DEFAULT_TERM};

/// Configuration loaded from environment variables via `envy`.
///
/// Each field maps to `SPF_SURVEY_<FIELD>`:
///   - `SPF_SURVEY_LISTEN_ADDR`  (default `0.0.0.0:8080`)
///   - `SPF_SURVEY_COMMAND`      (default `./spf.sh`)
///   - `SPF_SURVEY_TIMEOUT_SECS` (default `30`)
///   - `SPF_SURVEY_TERM`         (default `xterm`)
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Socket address to bind the HTTP server to.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Path to the SPF-checking script.
    #[serde(default = "default_command")]
    pub command: String,

    /// Hard bound on one checker invocation, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// `TERM` value passed to the checker.
    #[serde(default = "default_term")]
    pub term: String,
}

impl Config {
    /// Load from `SPF_SURVEY_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a present variable fails to deserialize
    /// (e.g. a non-numeric `SPF_SURVEY_TIMEOUT_SECS`).
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::prefixed("SPF_SURVEY_").from_env()
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_listen_addr() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_command() -> String {
    "./spf.sh".to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_RUN_TIMEOUT.as_secs()
}

fn default_term() -> String {
    DEFAULT_TERM.to_string()
}
