//! Infrastructure layer — concrete implementations of application port
//! traits plus environment-based configuration.
//!
//! This module contains all I/O-performing code. Imports from
//! `crate::domain` and `crate::application::ports` are allowed; imports
//! from `crate::server` or `crate::output` are forbidden.

pub mod command_runner;
pub mod config;

pub use command_runner::TokioCommandRunner;
pub use config::Config;
