// src/config.rs
// =============================================================================
// Settings for one scrape pass.
//
// The values come from the CLI (see cli.rs), where each flag can also be set
// through a GITALL_* environment variable. They are validated once here, so
// the fetch and scrape code can take a ScrapeConfig and trust it.
// =============================================================================

use std::time::Duration;

use url::Url;

use crate::error::ScrapeError;

/// Where public profiles are served from.
pub const DEFAULT_BASE_URL: &str = "https://github.com";

/// Listing pages hold 30 repositories, so this covers 3000 of them.
pub const DEFAULT_MAX_PAGES: u32 = 100;

pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Root that profile paths are appended to.
    pub base_url: Url,
    /// Hard ceiling on repository-listing pages per scrape pass.
    pub max_pages: u32,
    /// Applied to every outbound request.
    pub timeout: Duration,
}

impl ScrapeConfig {
    pub fn new(base_url: &str, max_pages: u32, timeout_secs: u64) -> Result<Self, ScrapeError> {
        let base_url = Url::parse(base_url)
            .map_err(|_| ScrapeError::InvalidBaseUrl(base_url.to_string()))?;

        // Only http(s) bases can carry a "/{username}" path segment
        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(ScrapeError::InvalidBaseUrl(base_url.to_string()));
        }

        Ok(ScrapeConfig {
            base_url,
            max_pages: max_pages.max(1),
            timeout: Duration::from_secs(timeout_secs.max(1)),
        })
    }
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        ScrapeConfig {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            max_pages: DEFAULT_MAX_PAGES,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
