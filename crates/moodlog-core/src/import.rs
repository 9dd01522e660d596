//! Read-only loader for the app's JSON export.
//!
//! The export is produced by the mobile app's backup feature; this module
//! only ever reads it. The file is a JSON object with an `items` map keyed
//! by entry id and a `tags` list from settings:
//!
//! ```json
//! {
//!   "items": {
//!     "e1": { "id": "e1", "date": "2024-03-04", "rating": "positive" }
//!   },
//!   "tags": [
//!     { "id": "t1", "label": "work" }
//!   ]
//! }
//! ```
//!
//! Loading validates the map keys against the embedded ids, rejects
//! duplicate dates, and clamps over-long messages to the editor's limit.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::models::{LogEntry, Tag};
use crate::{LogBook, LogBookError};

/// Errors that can occur while loading an export file.
#[derive(Debug, Error)]
pub enum ImportError {
    /// I/O error during file read.
    #[error("failed to read log file '{path}': {source}")]
    ReadError {
        /// The path that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// JSON deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An `items` key disagrees with the id stored in its entry.
    #[error("items key '{key}' does not match entry id '{id}'")]
    IdMismatch {
        /// The key in the `items` map.
        key: String,
        /// The id carried by the entry under that key.
        id: String,
    },

    /// The entries are inconsistent (duplicate id or date).
    #[error(transparent)]
    Invalid(#[from] LogBookError),
}

/// Result type for import operations.
pub type Result<T> = std::result::Result<T, ImportError>;

/// On-disk shape of the export file.
#[derive(Debug, Deserialize)]
struct ExportFile {
    #[serde(default)]
    items: BTreeMap<String, LogEntry>,

    #[serde(default)]
    tags: Vec<Tag>,
}

/// Parses an export from a JSON string.
///
/// # Errors
///
/// Returns [`ImportError::Json`] for malformed JSON, [`ImportError::IdMismatch`]
/// when a map key disagrees with its entry's id, and [`ImportError::Invalid`]
/// for duplicate ids or dates.
pub fn parse_log_book(json: &str) -> Result<LogBook> {
    let export: ExportFile = serde_json::from_str(json)?;

    let mut book = LogBook::new();
    book.set_tags(export.tags);

    for (key, mut entry) in export.items {
        if key != entry.id.as_str() {
            return Err(ImportError::IdMismatch {
                key,
                id: entry.id.to_string(),
            });
        }
        entry.clamp_message();
        book.insert(entry)?;
    }

    Ok(book)
}

/// Loads an export file from disk.
///
/// # Errors
///
/// Returns [`ImportError::ReadError`] if the file cannot be read, plus any
/// error [`parse_log_book`] can produce.
pub fn load_log_book(path: impl AsRef<Path>) -> Result<LogBook> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| ImportError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_log_book(&contents)
}
