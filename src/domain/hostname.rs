//! Pure hostname validation — no I/O, no async.
//!
//! RFC-952/1123 syntax only; whether the domain resolves or publishes an
//! SPF record is the external checker's concern.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::error::SurveyError;

/// Dot-separated labels, each 1–63 characters of letters/digits/hyphens
/// with no hyphen at either end; checked here before the string reaches
/// the process spawn.
static HOSTNAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Safety: this is a compile-time constant pattern — cannot fail.
    #[allow(clippy::expect_used)]
    Regex::new(
        r"^[A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?(\.[A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$",
    )
    .expect("valid regex")
});

/// Total hostname length limit in octets (RFC-1035).
const MAX_HOSTNAME_LEN: usize = 253;

/// A domain string that passed hostname syntax validation.
///
/// The only way to obtain one is [`ValidatedDomain::parse`]; the inner
/// string is exactly the trimmed input and is never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedDomain(String);

impl ValidatedDomain {
    /// Trim surrounding whitespace, then check hostname syntax.
    ///
    /// # Errors
    ///
    /// Returns [`SurveyError::InvalidDomainFormat`] if the trimmed input
    /// is empty, longer than 253 octets, or not dot-label syntax.
    pub fn parse(raw: &str) -> Result<Self, SurveyError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.len() > MAX_HOSTNAME_LEN || !HOSTNAME_RE.is_match(trimmed)
        {
            return Err(SurveyError::InvalidDomainFormat);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ValidatedDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
