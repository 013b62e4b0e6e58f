// src/github/mod.rs
// =============================================================================
// This module handles talking to github.com.
//
// Currently implements:
// - Building profile, listing-page and repository URLs
// - Fetching public HTML pages with a timeout (no API, no authentication)
//
// Nothing in here knows about the page markup; that lives in dom/ and scrape/.
// =============================================================================

mod fetch;
mod urls;

#[cfg(test)]
pub mod testing;

pub use fetch::{FetchError, FetchedPage, HttpFetcher, PageFetcher};
pub use urls::{profile_url, repositories_page_url, repository_link};
