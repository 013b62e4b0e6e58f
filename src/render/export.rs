// src/render/export.rs
// =============================================================================
// The downloadable copy of a user record.
//
// The file is UTF-8 JSON indented with four spaces. Non-ASCII text is written
// as-is, not \u-escaped. It is named "{username}_data.json" and is described
// as application/json.
// =============================================================================

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::model::UserRecord;
use crate::username::Username;

pub const JSON_MIME: &str = "application/json";

const INDENT: &[u8] = b"    ";

/// A ready-to-save export: file name, media type and contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonExport {
    pub file_name: String,
    pub mime: &'static str,
    pub contents: String,
}

impl JsonExport {
    /// Serializes `record`. The file is named after the scraped handle, or
    /// the submitted username when the page did not show one.
    pub fn new(record: &UserRecord, submitted: &Username) -> serde_json::Result<Self> {
        let handle = record.username.as_deref().unwrap_or(submitted.as_str());

        Ok(JsonExport {
            file_name: format!("{handle}_data.json"),
            mime: JSON_MIME,
            contents: to_indented_json(record)?,
        })
    }

    /// Writes the export into `dir` (created if missing) and returns the path.
    pub fn save_in(&self, dir: &Path) -> io::Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(&self.file_name);
        fs::write(&path, self.contents.as_bytes())?;
        Ok(path)
    }
}

/// Four-space indented JSON, as used for both the dashboard dump and the file.
pub fn to_indented_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let mut out = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut serializer)?;

    // serde_json only ever writes valid UTF-8
    Ok(String::from_utf8_lossy(&out).into_owned())
}
