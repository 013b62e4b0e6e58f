// Synthetic GitHub markup for tests. Only the classes and attributes the
// selectors look at are reproduced; everything else is trimmed away.

pub fn full_entry(name: &str, description: &str, language: &str, stars: &str) -> String {
    format!(
        r#"<li class="col-12 d-flex flex-justify-between width-full py-4 border-bottom color-border-muted public source" itemprop="owns">
  <div class="col-10 col-lg-9 d-inline-block">
    <h3 class="wb-break-all">
      <a href="/Queaxtra/{name}" itemprop="name codeRepository">
        {name}</a>
    </h3>
    <div>
      <p class="col-9 d-inline-block color-fg-muted mb-2 pr-4" itemprop="description">
        {description}
      </p>
    </div>
    <div class="f6 color-fg-muted mt-2">
      <span class="ml-0 mr-3">
        <span class="repo-language-color"></span>
        <span itemprop="programmingLanguage">{language}</span>
      </span>
      <a class="Link--muted mr-3" href="/Queaxtra/{name}/stargazers">
        <svg class="octicon octicon-star"></svg>
        {stars}
      </a>
    </div>
  </div>
</li>"#
    )
}

/// A listing entry with none of the optional fields.
pub fn bare_entry() -> String {
    r#"<li class="col-12 d-flex flex-justify-between width-full py-4 border-bottom color-border-muted public source">
  <div class="col-10 col-lg-9 d-inline-block"><h3>private-looking</h3></div>
</li>"#
        .to_string()
}

pub fn listing_page(entries: &[String]) -> String {
    format!(
        r#"<!DOCTYPE html>
<html><body>
<div id="user-repositories-list">
  <ul data-filterable-for="your-repos-filter">
{}
  </ul>
</div>
</body></html>"#,
        entries.join("\n")
    )
}

pub const PROFILE_PAGE: &str = r#"<!DOCTYPE html>
<html><body>
<div class="js-profile-editable-area">
  <a itemprop="image" href="https://avatars.githubusercontent.com/u/1?v=4">
    <img style="height:auto;" alt="View Queaxtra's full-sized avatar" src="https://avatars.githubusercontent.com/u/1?v=4" width="260" height="260" class="avatar avatar-user width-full border color-bg-default">
  </a>
  <h1 class="vcard-names">
    <span class="p-name vcard-fullname d-block overflow-hidden" itemprop="name">
      Quaxtra Dev
    </span>
    <span class="p-nickname vcard-username d-block" itemprop="additionalName">
      Queaxtra
    </span>
  </h1>
  <span class="Label Label--purple text-uppercase">Pro</span>
  <div class="p-note user-profile-bio mb-3 js-user-profile-bio f4" data-bio-text="Building small tools.">
    <div>Building small tools.</div>
  </div>
  <div class="flex-order-1 flex-md-order-none mt-2 mt-md-0">
    <div class="mb-3">
      <a class="Link--secondary" href="https://github.com/Queaxtra?tab=followers"><span class="text-bold">1.2k</span> followers</a> &middot; <a class="Link--secondary" href="https://github.com/Queaxtra?tab=following"><span class="text-bold">340</span> following</a>
    </div>
  </div>
  <ul class="vcard-details">
    <li itemprop="worksFor"><span class="p-org"><div>@acme</div></span></li>
    <li itemprop="homeLocation"><span class="p-label">Istanbul, Türkiye</span></li>
  </ul>
</div>
<div class="border-top color-border-muted pt-3 mt-3 clearfix hide-sm hide-md">
  <h2 class="h4 mb-2">Organizations</h2>
  <a aria-label="@acme" itemprop="follows" class="avatar-group-item" href="/acme"><img alt="@acme"></a>
  <a aria-label="@rustaceans" itemprop="follows" class="avatar-group-item" href="/rustaceans"><img alt="@rustaceans"></a>
  <a class="avatar-group-item" href="/hidden"></a>
</div>
</body></html>"#;
