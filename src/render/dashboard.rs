// src/render/dashboard.rs
// =============================================================================
// Terminal rendering of a scraped profile.
//
// Sections, top to bottom:
// - User Information (avatar, identity fields, follow counts, affiliation)
// - Organization Information (only when the profile lists organizations)
// - Repository Information (count + one block per repository)
// - User Data with JSON (the same record the download contains)
//
// Lines for absent values are left out rather than printed empty.
// Everything is written into a String so the output can be tested.
// =============================================================================

use std::fmt::Write;

use crate::model::{PaginationEnd, PaginationSummary, Profile, RepositoryRecord};

use super::export::to_indented_json;

const RULE_WIDTH: usize = 72;

/// Renders the whole dashboard for one profile.
pub fn render_dashboard(profile: &Profile) -> serde_json::Result<String> {
    let mut out = String::new();

    render_user(&mut out, profile);
    render_organizations(&mut out, &profile.organizations);
    render_repositories(&mut out, &profile.record.repositories, &profile.pagination);

    heading(&mut out, "User Data with JSON");
    out.push_str(&to_indented_json(&profile.record)?);
    out.push('\n');

    Ok(out)
}

/// Renders only the repository section, for the collector-only command.
pub fn render_repository_list(repositories: &[RepositoryRecord], pagination: &PaginationSummary) -> String {
    let mut out = String::new();
    render_repositories(&mut out, repositories, pagination);
    out
}

fn render_user(out: &mut String, profile: &Profile) {
    let record = &profile.record;
    heading(out, "User Information");

    field(out, "🖼️ ", "Avatar", record.avatar_url.as_deref());

    // Left column: who they are
    field(out, "👤", "Username", record.username.as_deref());
    field(out, "📛", "Name", record.name.as_deref());
    field(out, "📝", "Bio", record.bio.as_deref());
    if let Some(follow) = &profile.follow {
        field(out, "👥", "Followers", Some(&follow.followers));
    }

    // Right column: where they belong
    field(out, "🏷️ ", "Account Type", record.account_type.as_deref());
    field(out, "🏢", "Organization", record.organization.as_deref());
    field(out, "🌍", "Country", record.country.as_deref());
    if let Some(follow) = &profile.follow {
        field(out, "➡️ ", "Following", Some(&follow.following));
    }
}

fn render_organizations(out: &mut String, organizations: &[String]) {
    if organizations.is_empty() {
        return;
    }

    heading(out, "Organization Information");
    for label in organizations {
        field(out, "🏢", "Organization", Some(label));
    }
}

fn render_repositories(out: &mut String, repositories: &[RepositoryRecord], pagination: &PaginationSummary) {
    heading(out, "Repository Information");

    if repositories.is_empty() {
        let _ = writeln!(out, "❌ Repository not found or all are private.");
    } else {
        let _ = writeln!(out, "✅ Total Repository Count: {}", repositories.len());

        for repo in repositories {
            let _ = writeln!(out, "\n▸ {}", repo.name);
            indented(out, "Description", repo.description.as_deref());
            indented(out, "Programming Language", repo.language.as_deref());
            indented(out, "Star Count", Some(&repo.stars));
            indented(out, "Link", repo.link.as_deref());
        }
    }

    if let Some(warning) = pagination_warning(pagination) {
        let _ = writeln!(out, "\n⚠️  {warning}");
    }
}

/// Explains why the repository list may be short, if it may be.
pub fn pagination_warning(pagination: &PaginationSummary) -> Option<String> {
    match &pagination.end {
        PaginationEnd::Exhausted => None,
        PaginationEnd::PageLimit => Some(format!(
            "Stopped after {} listing pages; repository list may be incomplete.",
            pagination.pages_requested
        )),
        PaginationEnd::Interrupted { page, reason } => Some(format!(
            "Listing page {page} failed ({reason}); repository list may be incomplete."
        )),
    }
}

fn heading(out: &mut String, title: &str) {
    if !out.is_empty() {
        out.push('\n');
    }
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
}

fn field(out: &mut String, icon: &str, label: &str, value: Option<&str>) {
    if let Some(value) = value {
        let _ = writeln!(out, "{icon} {label}: {value}");
    }
}

fn indented(out: &mut String, label: &str, value: Option<&str>) {
    if let Some(value) = value {
        let _ = writeln!(out, "    {label}: {value}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FollowCounts, UserRecord};

    fn profile(repositories: Vec<RepositoryRecord>, end: PaginationEnd) -> Profile {
        Profile {
            record: UserRecord {
                username: Some("Queaxtra".into()),
                name: None,
                bio: Some("Building small tools.".into()),
                account_type: None,
                organization: None,
                country: Some("Türkiye".into()),
                avatar_url: None,
                repositories,
            },
            follow: Some(FollowCounts {
                followers: "1.2k followers".into(),
                following: "340 following".into(),
            }),
            organizations: vec!["@acme".into()],
            pagination: PaginationSummary {
                pages_requested: 2,
                end,
            },
        }
    }

    fn repo(name: &str) -> RepositoryRecord {
        RepositoryRecord {
            name: name.into(),
            description: Some("desc".into()),
            language: None,
            stars: "7".into(),
            link: Some(format!("https://github.com/Queaxtra/{name}")),
        }
    }

    #[test]
    fn test_renders_present_fields_only() {
        let text = render_dashboard(&profile(vec![repo("gitall")], PaginationEnd::Exhausted)).unwrap();

        assert!(text.contains("👤 Username: Queaxtra"));
        assert!(text.contains("📝 Bio: Building small tools."));
        assert!(text.contains("👥 Followers: 1.2k followers"));
        assert!(text.contains("➡️  Following: 340 following"));
        assert!(text.contains("🌍 Country: Türkiye"));
        assert!(!text.contains("Name:"));
        assert!(!text.contains("Account Type"));
    }

    #[test]
    fn test_renders_repositories_and_json() {
        let text = render_dashboard(&profile(vec![repo("gitall"), repo("notes")], PaginationEnd::Exhausted)).unwrap();

        assert!(text.contains("Organization Information"));
        assert!(text.contains("✅ Total Repository Count: 2"));
        assert!(text.contains("▸ gitall\n    Description: desc\n    Star Count: 7\n    Link: https://github.com/Queaxtra/gitall"));
        assert!(!text.contains("Programming Language"));
        assert!(text.contains("User Data with JSON"));
        assert!(text.contains("    \"username\": \"Queaxtra\","));
        assert!(!text.contains("⚠️"));
    }

    #[test]
    fn test_empty_repository_list_message() {
        let text = render_dashboard(&profile(Vec::new(), PaginationEnd::Exhausted)).unwrap();
        assert!(text.contains("Repository not found or all are private."));
    }

    #[test]
    fn test_interrupted_pagination_warns() {
        let end = PaginationEnd::Interrupted {
            page: 2,
            reason: "HTTP 502".into(),
        };
        let text = render_dashboard(&profile(vec![repo("gitall")], end)).unwrap();
        assert!(text.contains("Listing page 2 failed (HTTP 502); repository list may be incomplete."));
    }

    #[test]
    fn test_page_limit_warning() {
        let summary = PaginationSummary {
            pages_requested: 100,
            end: PaginationEnd::PageLimit,
        };
        assert_eq!(
            pagination_warning(&summary).unwrap(),
            "Stopped after 100 listing pages; repository list may be incomplete."
        );
    }
}
