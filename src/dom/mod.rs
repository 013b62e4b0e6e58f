// src/dom/mod.rs
// =============================================================================
// HTML querying for the scraper.
//
// Submodules:
// - document: parsed pages behind the find_all / find_one Scope interface
// - selectors: the CSS signatures of the fields we extract
// =============================================================================

mod document;
pub mod selectors;

pub use document::{Element, Page, Scope};
