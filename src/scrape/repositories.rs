// src/scrape/repositories.rs
// =============================================================================
// The Repository Collector: walks the paginated repository listing of a
// profile and extracts one RepositoryRecord per entry.
//
// How it works:
// 1. Request ?tab=repositories&page=1, then page=2, and so on
// 2. Classify each response: entries found, no entries, or failed
// 3. Keep going while pages have entries, up to the configured ceiling
//
// A failed page is never retried. It ends pagination and is reported in the
// PaginationSummary, so callers can tell "no more repositories" apart from
// "we stopped early".
// =============================================================================

use reqwest::StatusCode;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

use crate::config::ScrapeConfig;
use crate::dom::{selectors::listing, Element, Page, Scope};
use crate::error::ScrapeError;
use crate::github::{self, FetchError, PageFetcher};
use crate::model::{
    PaginationEnd, PaginationSummary, RepositoryRecord, DEFAULT_STARS, UNKNOWN_REPOSITORY,
};
use crate::username::Username;

/// Result of walking the whole listing.
#[derive(Debug, Clone)]
pub struct RepositoryCollection {
    pub repositories: Vec<RepositoryRecord>,
    pub pagination: PaginationSummary,
}

/// What one listing page turned out to be.
#[derive(Debug)]
pub enum PageOutcome {
    Entries(Vec<RepositoryRecord>),
    Empty,
    Failed(PageFailure),
}

#[derive(Debug, Error)]
pub enum PageFailure {
    #[error("HTTP {}", .0.as_u16())]
    Status(StatusCode),

    #[error(transparent)]
    Transport(#[from] FetchError),
}

/// Collects every public, non-fork repository listed for `username`.
///
/// Only a misconfigured base URL is an error; page failures end up in
/// `pagination` instead.
pub async fn collect_repositories(
    fetcher: &dyn PageFetcher,
    config: &ScrapeConfig,
    username: &Username,
) -> Result<RepositoryCollection, ScrapeError> {
    let mut repositories = Vec::new();
    let mut page = 1;

    let end = loop {
        if page > config.max_pages {
            warn!(%username, max_pages = config.max_pages, "page limit reached; repository list may be incomplete");
            break PaginationEnd::PageLimit;
        }

        match fetch_listing_page(fetcher, config, username, page).await? {
            PageOutcome::Entries(records) => {
                debug!(%username, page, count = records.len(), "listing page");
                repositories.extend(records);
                page += 1;
            }
            PageOutcome::Empty => {
                debug!(%username, page, "listing page empty; done");
                break PaginationEnd::Exhausted;
            }
            PageOutcome::Failed(failure) => {
                warn!(%username, page, reason = %failure, "listing page failed; repository list may be incomplete");
                break PaginationEnd::Interrupted {
                    page,
                    reason: failure.to_string(),
                };
            }
        }
    };

    // `page` points one past the last page when the ceiling stopped us
    let pages_requested = match end {
        PaginationEnd::PageLimit => page - 1,
        _ => page,
    };

    Ok(RepositoryCollection {
        repositories,
        pagination: PaginationSummary {
            pages_requested,
            end,
        },
    })
}

/// Fetches and classifies a single listing page.
pub async fn fetch_listing_page(
    fetcher: &dyn PageFetcher,
    config: &ScrapeConfig,
    username: &Username,
    page: u32,
) -> Result<PageOutcome, ScrapeError> {
    let url = github::repositories_page_url(&config.base_url, username, page)?;

    let fetched = match fetcher.get(&url).await {
        Ok(fetched) => fetched,
        Err(e) => return Ok(PageOutcome::Failed(e.into())),
    };

    if !fetched.is_success() {
        return Ok(PageOutcome::Failed(PageFailure::Status(fetched.status)));
    }

    let document = Page::parse(&fetched.body);
    let records = extract_repositories(&document, &config.base_url, username);

    if records.is_empty() {
        Ok(PageOutcome::Empty)
    } else {
        Ok(PageOutcome::Entries(records))
    }
}

/// Extracts every listing entry on a page, in page order.
pub fn extract_repositories(
    scope: &impl Scope,
    base: &Url,
    username: &Username,
) -> Vec<RepositoryRecord> {
    scope
        .find_all(listing::ENTRY)
        .iter()
        .map(|entry| extract_repository(entry, base, username))
        .collect()
}

// Each field is looked up on its own; a miss only empties that field
fn extract_repository(entry: &Element<'_>, base: &Url, username: &Username) -> RepositoryRecord {
    let name = entry.find_one(listing::NAME).map(|e| e.text());
    let description = entry.find_one(listing::DESCRIPTION).map(|e| e.text());
    let language = entry.find_one(listing::LANGUAGE).map(|e| e.text());
    let stars = entry.find_one(listing::STARS).map(|e| e.text());

    if name.is_none() {
        debug!(%username, "listing entry without a name link");
    }

    let link = name
        .as_deref()
        .map(|name| github::repository_link(base, username, name));

    RepositoryRecord {
        name: name.unwrap_or_else(|| UNKNOWN_REPOSITORY.to_string()),
        description,
        language,
        stars: stars.unwrap_or_else(|| DEFAULT_STARS.to_string()),
        link,
    }
}
