// src/dom/selectors.rs
// =============================================================================
// The markup signatures we look for on GitHub's pages.
//
// GitHub's HTML is not a versioned interface, so when a field stops showing
// up, this file should be the only one that needs to change.
// =============================================================================

/// Repository-listing page (`?tab=repositories`).
pub mod listing {
    /// One public, non-fork repository entry.
    pub const ENTRY: &str = "li.col-12.d-flex.flex-justify-between.width-full.py-4.border-bottom.color-border-muted.public.source";

    pub const NAME: &str = r#"a[itemprop="name codeRepository"]"#;
    pub const DESCRIPTION: &str = "p.col-9.d-inline-block.color-fg-muted.mb-2.pr-4";
    pub const LANGUAGE: &str = r#"span[itemprop="programmingLanguage"]"#;
    pub const STARS: &str = "a.Link--muted.mr-3";
}

/// Profile root page.
pub mod profile {
    pub const AVATAR: &str = "img.avatar.avatar-user.width-full.border.color-bg-default";
    pub const USERNAME: &str = "span.p-nickname.vcard-username.d-block";
    pub const NAME: &str = "span.p-name.vcard-fullname.d-block.overflow-hidden";
    pub const BIO: &str = "div.p-note.user-profile-bio.mb-3.js-user-profile-bio.f4";
    pub const ACCOUNT_TYPE: &str = "span.Label.Label--purple.text-uppercase";
    pub const ORGANIZATION: &str = "span.p-org";
    pub const COUNTRY: &str = "span.p-label";

    /// Sidebar block listing the organizations the user belongs to.
    pub const ORGANIZATIONS: &str = "div.border-top.color-border-muted.pt-3.mt-3.clearfix.hide-sm.hide-md";
    /// Links inside ORGANIZATIONS; the label is in `aria-label`.
    pub const ORGANIZATION_LINK: &str = "a";

    /// "N followers · M following"
    pub const FOLLOW: &str = "div.flex-order-1.flex-md-order-none.mt-2.mt-md-0";
}
