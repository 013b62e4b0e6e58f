// src/github/urls.rs
// =============================================================================
// URL construction for the pages we scrape.
//
//   profile root:      {base}/{username}
//   listing page n:    {base}/{username}?tab=repositories&page={n}
//   repository link:   {base}/{username}/{repository}
//
// All three start from the configured base URL, so a mirror or a local test
// server can stand in for github.com.
// =============================================================================

use url::Url;

use crate::error::ScrapeError;
use crate::username::Username;

/// URL of the profile root page.
pub fn profile_url(base: &Url, username: &Username) -> Result<Url, ScrapeError> {
    with_segments(base, &[username.as_str()])
}

/// URL of the n-th repository-listing page (1-based).
pub fn repositories_page_url(base: &Url, username: &Username, page: u32) -> Result<Url, ScrapeError> {
    let mut url = profile_url(base, username)?;
    url.query_pairs_mut()
        .append_pair("tab", "repositories")
        .append_pair("page", &page.to_string());
    Ok(url)
}

/// Link to a repository, built from the submitted username and the scraped name.
///
/// The text is joined as-is, not percent-encoded, so the link reads exactly
/// like the name shown next to it.
pub fn repository_link(base: &Url, username: &Username, name: &str) -> String {
    let mut root = base.clone();
    root.set_query(None);
    root.set_fragment(None);

    format!("{}/{}/{}", root.as_str().trim_end_matches('/'), username, name)
}

fn with_segments(base: &Url, segments: &[&str]) -> Result<Url, ScrapeError> {
    let mut url = base.clone();
    url.set_query(None);
    url.set_fragment(None);

    url.path_segments_mut()
        .map_err(|_| ScrapeError::InvalidBaseUrl(base.to_string()))?
        // "https://github.com/" has one empty segment; drop it before pushing
        .pop_if_empty()
        .extend(segments);

    Ok(url)
}
