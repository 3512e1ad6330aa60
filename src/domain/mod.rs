//! Domain layer — pure types and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::server`,
//! `tokio`, `std::fs`, `std::process`, or `std::net`. All functions are
//! synchronous and take data in, returning data out.

pub mod error;
pub mod hostname;

pub use error::{RunError, SurveyError};
pub use hostname::ValidatedDomain;
