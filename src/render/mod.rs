// src/render/mod.rs
// =============================================================================
// Output side of the tool: the terminal dashboard and the JSON export.
//
// Both take the records from model.rs and never fetch anything themselves.
// =============================================================================

mod dashboard;
mod export;

pub use dashboard::{pagination_warning, render_dashboard, render_repository_list};
pub use export::{to_indented_json, JsonExport};
