// src/model.rs
// =============================================================================
// The records a scrape pass produces.
//
// UserRecord and RepositoryRecord are what gets serialized (dashboard JSON
// section and the downloadable file). Profile wraps the record with the
// display-only extras (follow counts, organization labels, how pagination
// ended) that never go into the JSON.
//
// Every value is display text exactly as scraped. Star counts like "1.2k"
// stay strings.
// =============================================================================

use serde::{Deserialize, Serialize};

/// Name used when a listing entry has no recognizable name link.
pub const UNKNOWN_REPOSITORY: &str = "Unknown Repository";

/// Star text used when a listing entry shows no star link.
pub const DEFAULT_STARS: &str = "0";

/// One entry from the repository-listing pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    pub name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    /// Raw display text, e.g. "1.2k". Not a number.
    pub stars: String,
    /// Present only when the name was actually found.
    pub link: Option<String>,
}

/// Everything scraped for one username. Rebuilt from scratch per submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: Option<String>,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub account_type: Option<String>,
    pub organization: Option<String>,
    pub country: Option<String>,
    pub avatar_url: Option<String>,
    /// Listing order: page by page, top to bottom.
    pub repositories: Vec<RepositoryRecord>,
}

/// The two halves of the "followers · following" block, as display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FollowCounts {
    pub followers: String,
    pub following: String,
}

/// Why the Repository Collector stopped asking for pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "end", rename_all = "snake_case")]
pub enum PaginationEnd {
    /// A page came back with no entries.
    Exhausted,
    /// The configured page ceiling was reached while pages were still full.
    PageLimit,
    /// A page failed (bad status or transport error). Later pages were not tried.
    Interrupted { page: u32, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationSummary {
    /// How many listing pages were requested, including the one that ended it.
    pub pages_requested: u32,
    #[serde(flatten)]
    pub end: PaginationEnd,
}

impl PaginationSummary {
    /// True when the repository list may be missing entries.
    pub fn is_incomplete(&self) -> bool {
        !matches!(self.end, PaginationEnd::Exhausted)
    }
}

/// What the dashboard renders for one submission.
#[derive(Debug, Clone)]
pub struct Profile {
    pub record: UserRecord,
    pub follow: Option<FollowCounts>,
    pub organizations: Vec<String>,
    pub pagination: PaginationSummary,
}
