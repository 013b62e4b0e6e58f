// src/scrape/mod.rs
// =============================================================================
// This module turns GitHub's public pages into records.
//
// Submodules:
// - repositories: the Repository Collector (paginated listing)
// - profile: the Profile Extractor (profile root page + merge)
// - follow: parsing of the "followers · following" block
//
// All field lookups go through the dom::Scope interface and the selector
// constants in dom::selectors.
// =============================================================================

mod follow;
mod profile;
mod repositories;

#[cfg(test)]
mod fixtures;

pub use profile::scrape_profile;
pub use repositories::collect_repositories;
