// src/username.rs
// =============================================================================
// Validation for the username typed into the form (or passed on the CLI).
//
// A username is accepted only when it is non-empty and every character is
// alphanumeric. Hyphens are rejected even though GitHub allows them; the
// check runs before any request is made.
// =============================================================================

use std::fmt;

use crate::error::ScrapeError;

/// A submitted username that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    /// Validates raw input. Surrounding whitespace is not trimmed; a stray
    /// space is a non-alphanumeric character like any other.
    pub fn parse(raw: &str) -> Result<Self, ScrapeError> {
        if raw.is_empty() || !raw.chars().all(char::is_alphanumeric) {
            return Err(ScrapeError::InvalidUsername(raw.to_string()));
        }
        Ok(Username(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
