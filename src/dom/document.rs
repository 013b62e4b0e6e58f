// src/dom/document.rs
// =============================================================================
// A parsed HTML page behind a small query interface.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// The scrape code only ever sees the Scope trait (find_all / find_one), text
// and attributes. It never touches scraper types directly, so swapping the
// parser or feeding synthetic fixtures needs no change there.
// =============================================================================

use scraper::{ElementRef, Html, Selector};
use tracing::warn;

/// Something that can be searched with a CSS selector: a whole page, or
/// one element of it (searching its descendants only).
pub trait Scope {
    /// All matches in document order. An unparsable selector matches nothing.
    fn find_all(&self, css: &str) -> Vec<Element<'_>>;

    /// The first match, if any.
    fn find_one(&self, css: &str) -> Option<Element<'_>> {
        self.find_all(css).into_iter().next()
    }
}

/// An owned, parsed HTML document.
pub struct Page {
    html: Html,
}

impl Page {
    pub fn parse(body: &str) -> Self {
        Page {
            html: Html::parse_document(body),
        }
    }
}

impl Scope for Page {
    fn find_all(&self, css: &str) -> Vec<Element<'_>> {
        match parse_selector(css) {
            Some(selector) => self.html.select(&selector).map(Element).collect(),
            None => Vec::new(),
        }
    }
}

/// One element borrowed from a Page.
#[derive(Clone, Copy)]
pub struct Element<'a>(ElementRef<'a>);

impl<'a> Element<'a> {
    /// All descendant text joined together, with surrounding whitespace trimmed.
    pub fn text(&self) -> String {
        self.0.text().collect::<String>().trim().to_string()
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.0.value().attr(name)
    }
}

impl Scope for Element<'_> {
    fn find_all(&self, css: &str) -> Vec<Element<'_>> {
        match parse_selector(css) {
            Some(selector) => self.0.select(&selector).map(Element).collect(),
            None => Vec::new(),
        }
    }
}

fn parse_selector(css: &str) -> Option<Selector> {
    match Selector::parse(css) {
        Ok(selector) => Some(selector),
        Err(e) => {
            warn!(selector = css, error = %e, "invalid CSS selector");
            None
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a trait for find_all / find_one?
//    - Page and Element both answer the same two questions
//    - Extraction functions take `&impl Scope`, so they work on either
//
// 2. What is Element<'a>?
//    - A borrowed view into a Page; 'a ties it to the Page it came from
//    - attr() hands back &'a str, so the text lives as long as the Page
//
// 3. Why not unwrap() Selector::parse?
//    - An invalid selector here only means "field not found"
//    - That is already how every missing field is treated
// -----------------------------------------------------------------------------
