// src/github/fetch.rs
// =============================================================================
// This module fetches the public HTML pages of a GitHub profile.
//
// Strategy:
// - Plain GET requests, no authentication, no custom headers
// - Every request carries the configured timeout
// - The status code is handed back to the caller, not turned into an error:
//   a failing profile page aborts the pass, a failing listing page only ends
//   pagination
//
// The fetcher sits behind the PageFetcher trait so the scrape logic can run
// against scripted pages in tests.
// =============================================================================

use std::time::Duration;

use futures::future::BoxFuture;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::config::ScrapeConfig;

/// A fetched page: its status and body text.
///
/// The body is kept even for non-success statuses; callers decide whether
/// to look at it.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub status: StatusCode,
    pub body: String,
}

impl FetchedPage {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Transport-level failures (no HTTP status to look at).
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("could not connect: {0}")]
    Connect(String),

    #[error("{0}")]
    Other(String),
}

/// Anything that can GET a URL and return its status and body.
pub trait PageFetcher: Send + Sync {
    fn get<'a>(&'a self, url: &'a Url) -> BoxFuture<'a, Result<FetchedPage, FetchError>>;
}

/// The real fetcher, backed by a shared reqwest client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpFetcher {
    pub fn new(config: &ScrapeConfig) -> Result<Self, reqwest::Error> {
        // One client per process; it is reused across pages (connection pooling)
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(HttpFetcher {
            client,
            timeout: config.timeout,
        })
    }
}

impl PageFetcher for HttpFetcher {
    fn get<'a>(&'a self, url: &'a Url) -> BoxFuture<'a, Result<FetchedPage, FetchError>> {
        Box::pin(async move {
            debug!(%url, "GET");

            let response = self
                .client
                .get(url.clone())
                .send()
                .await
                .map_err(|e| categorize_error(e, self.timeout))?;

            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| categorize_error(e, self.timeout))?;

            debug!(%url, status = status.as_u16(), bytes = body.len(), "response");
            Ok(FetchedPage { status, body })
        })
    }
}

// Sorts reqwest errors into the few cases the dashboard distinguishes
fn categorize_error(error: reqwest::Error, timeout: Duration) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout(timeout)
    } else if error.is_connect() {
        FetchError::Connect(error.to_string())
    } else {
        FetchError::Other(error.to_string())
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is BoxFuture?
//    - A heap-allocated, pinned future: Pin<Box<dyn Future + Send + 'a>>
//    - Traits can't have plain `async fn` and still be used as `dyn Trait`,
//      so the method returns a boxed future instead
//
// 2. Why Send + Sync on PageFetcher?
//    - The interactive session runs each scrape in a tokio::spawn'ed task
//    - Spawned tasks may move between threads, so the fetcher must be
//      shareable across them
//
// 3. Why return the status instead of failing on 404?
//    - The profile page and the listing pages react differently to it
// -----------------------------------------------------------------------------
