// src/scrape/profile.rs
// =============================================================================
// The Profile Extractor: one full scrape pass for a username.
//
// Order of work:
// 1. Run the Repository Collector (listing pages)
// 2. Fetch the profile root page once
// 3. Pull the user-level fields out of it, each one optional
// 4. Merge everything into a Profile for the dashboard
//
// A non-success answer for the profile page aborts the pass with its status.
// The repositories fetched in step 1 are dropped in that case.
// =============================================================================

use tracing::{debug, info, info_span, Instrument};

use crate::config::ScrapeConfig;
use crate::dom::{selectors::profile, Page, Scope};
use crate::error::ScrapeError;
use crate::github::{self, PageFetcher};
use crate::model::{PaginationSummary, Profile, RepositoryRecord, UserRecord};
use crate::username::Username;

use super::follow::parse_follow_counts;
use super::repositories::collect_repositories;

/// Runs a full scrape pass: repositories first, then the profile page.
pub async fn scrape_profile(
    fetcher: &dyn PageFetcher,
    config: &ScrapeConfig,
    username: &Username,
) -> Result<Profile, ScrapeError> {
    let span = info_span!("scrape", %username);

    async move {
        let collection = collect_repositories(fetcher, config, username).await?;

        let url = github::profile_url(&config.base_url, username)?;
        let fetched = fetcher
            .get(&url)
            .await
            .map_err(|source| ScrapeError::Request {
                url: url.to_string(),
                source,
            })?;

        if !fetched.is_success() {
            return Err(ScrapeError::ProfileFetch {
                status: fetched.status,
            });
        }

        let page = Page::parse(&fetched.body);
        let profile = extract_profile(&page, collection.repositories, collection.pagination);

        info!(
            repositories = profile.record.repositories.len(),
            pages = profile.pagination.pages_requested,
            incomplete = profile.pagination.is_incomplete(),
            "scrape complete"
        );
        Ok(profile)
    }
    .instrument(span)
    .await
}

/// Builds a Profile from a parsed profile page plus already collected repositories.
pub fn extract_profile(
    scope: &impl Scope,
    repositories: Vec<RepositoryRecord>,
    pagination: PaginationSummary,
) -> Profile {
    let avatar_url = scope
        .find_one(profile::AVATAR)
        .and_then(|img| img.attr("src"))
        .map(String::from);

    let record = UserRecord {
        username: text_of(scope, profile::USERNAME),
        name: text_of(scope, profile::NAME),
        bio: text_of(scope, profile::BIO),
        account_type: text_of(scope, profile::ACCOUNT_TYPE),
        organization: text_of(scope, profile::ORGANIZATION),
        country: text_of(scope, profile::COUNTRY),
        avatar_url,
        repositories,
    };

    let follow = text_of(scope, profile::FOLLOW).and_then(|text| parse_follow_counts(&text));

    Profile {
        record,
        follow,
        organizations: organization_labels(scope),
        pagination,
    }
}

fn text_of(scope: &impl Scope, css: &str) -> Option<String> {
    let text = scope.find_one(css).map(|e| e.text());
    if text.is_none() {
        debug!(selector = css, "profile field not found");
    }
    text
}

// Labels of the organization badges; links without an aria-label are skipped
fn organization_labels(scope: &impl Scope) -> Vec<String> {
    let Some(container) = scope.find_one(profile::ORGANIZATIONS) else {
        return Vec::new();
    };

    container
        .find_all(profile::ORGANIZATION_LINK)
        .iter()
        .filter_map(|link| link.attr("aria-label"))
        .filter(|label| !label.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::testing::ScriptedFetcher;
    use crate::model::PaginationEnd;
    use crate::scrape::fixtures;
    use reqwest::StatusCode;

    const PAGE_1: &str = "https://github.com/Queaxtra?tab=repositories&page=1";
    const PAGE_2: &str = "https://github.com/Queaxtra?tab=repositories&page=2";
    const PROFILE: &str = "https://github.com/Queaxtra";

    fn queaxtra() -> Username {
        Username::parse("Queaxtra").unwrap()
    }

    fn exhausted(pages: u32) -> PaginationSummary {
        PaginationSummary {
            pages_requested: pages,
            end: PaginationEnd::Exhausted,
        }
    }

    fn scripted_user() -> ScriptedFetcher {
        ScriptedFetcher::new()
            .ok(
                PAGE_1,
                &fixtures::listing_page(&[
                    fixtures::full_entry("gitall", "GitHub profile viewer", "Python", "1.2k"),
                    fixtures::full_entry("notes", "Scratch", "Markdown", "0"),
                ]),
            )
            .ok(PAGE_2, &fixtures::listing_page(&[]))
            .ok(PROFILE, fixtures::PROFILE_PAGE)
    }

    #[test]
    fn test_extracts_profile_fields() {
        let page = Page::parse(fixtures::PROFILE_PAGE);
        let profile = extract_profile(&page, Vec::new(), exhausted(1));
        let record = &profile.record;

        assert_eq!(record.username.as_deref(), Some("Queaxtra"));
        assert_eq!(record.name.as_deref(), Some("Quaxtra Dev"));
        assert_eq!(record.bio.as_deref(), Some("Building small tools."));
        assert_eq!(record.account_type.as_deref(), Some("Pro"));
        assert_eq!(record.organization.as_deref(), Some("@acme"));
        assert_eq!(record.country.as_deref(), Some("Istanbul, Türkiye"));
        assert_eq!(
            record.avatar_url.as_deref(),
            Some("https://avatars.githubusercontent.com/u/1?v=4")
        );

        let follow = profile.follow.unwrap();
        assert_eq!(follow.followers, "1.2k followers");
        assert_eq!(follow.following, "340 following");

        assert_eq!(profile.organizations, vec!["@acme", "@rustaceans"]);
    }

    #[test]
    fn test_missing_fields_are_absent() {
        let page = Page::parse("<html><body><p>nothing here</p></body></html>");
        let profile = extract_profile(&page, Vec::new(), exhausted(1));

        assert_eq!(profile.record.username, None);
        assert_eq!(profile.record.bio, None);
        assert_eq!(profile.record.avatar_url, None);
        assert_eq!(profile.follow, None);
        assert!(profile.organizations.is_empty());
    }

    #[test]
    fn test_malformed_follow_block_is_absent() {
        let html = r#"<div class="flex-order-1 flex-md-order-none mt-2 mt-md-0">12 followers</div>"#;
        let profile = extract_profile(&Page::parse(html), Vec::new(), exhausted(1));
        assert_eq!(profile.follow, None);
    }

    #[tokio::test]
    async fn test_full_scrape_pass() {
        let fetcher = scripted_user();

        let profile = scrape_profile(&fetcher, &ScrapeConfig::default(), &queaxtra())
            .await
            .unwrap();

        assert_eq!(fetcher.requests(), vec![PAGE_1, PAGE_2, PROFILE]);
        assert_eq!(profile.record.repositories.len(), 2);
        assert_eq!(profile.record.repositories[0].name, "gitall");
        assert_eq!(profile.pagination.pages_requested, 2);
        assert_eq!(profile.record.username.as_deref(), Some("Queaxtra"));
    }

    #[tokio::test]
    async fn test_profile_fetch_error_carries_status() {
        let fetcher = ScriptedFetcher::new()
            .ok(PAGE_1, &fixtures::listing_page(&[]))
            .page(PROFILE, StatusCode::TOO_MANY_REQUESTS, "slow down");

        let err = scrape_profile(&fetcher, &ScrapeConfig::default(), &queaxtra())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ScrapeError::ProfileFetch { status } if status == StatusCode::TOO_MANY_REQUESTS
        ));
        assert_eq!(err.to_string(), "Data fetching error! Profile: 429");
    }

    #[tokio::test]
    async fn test_same_fixture_gives_identical_json() {
        let config = ScrapeConfig::default();

        let first = scrape_profile(&scripted_user(), &config, &queaxtra()).await.unwrap();
        let second = scrape_profile(&scripted_user(), &config, &queaxtra()).await.unwrap();

        let first = serde_json::to_vec(&first.record).unwrap();
        let second = serde_json::to_vec(&second.record).unwrap();
        assert_eq!(first, second);
    }
}
