//! Error types for a scrape pass.

use reqwest::StatusCode;
use thiserror::Error;

use crate::github::FetchError;

/// Errors that abort a scrape pass and are shown to the user.
///
/// Per-field extraction misses are not errors: they become absent values.
/// Repository pages that fail are reported through the pagination summary
/// instead, so the profile can still render.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Input failed the alphanumeric check; no request was made.
    #[error("Please enter a valid GitHub username. Username should be alphanumeric (got {0:?}).")]
    InvalidUsername(String),

    /// The profile root page answered with a non-success status.
    #[error("Data fetching error! Profile: {}", .status.as_u16())]
    ProfileFetch { status: StatusCode },

    /// The profile root page could not be fetched at all.
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: FetchError,
    },

    /// The configured base URL cannot carry a username path segment.
    #[error("Base URL {0} cannot be used to build profile URLs")]
    InvalidBaseUrl(String),
}

impl ScrapeError {
    /// True for errors caused by what the user typed or by what the remote
    /// side answered, as opposed to local misconfiguration.
    pub fn is_user_visible(&self) -> bool {
        matches!(
            self,
            ScrapeError::InvalidUsername(_) | ScrapeError::ProfileFetch { .. } | ScrapeError::Request { .. }
        )
    }
}
