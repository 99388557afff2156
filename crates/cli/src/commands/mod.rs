//! Command implementations for ro-cli.

pub mod channels;
pub mod menu;
pub mod missing;
pub mod snooze;

use std::path::Path;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Failed to read an input listing from disk.
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    /// Input file is not valid JSON for the expected listing shape.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// An exported listing: either a bare JSON array or a raw API page dump with
/// the items under `_items`.
#[derive(Deserialize)]
#[serde(untagged)]
enum ListingFile<T> {
    Items(Vec<T>),
    Page {
        #[serde(rename = "_items", default = "Vec::new")]
        items: Vec<T>,
    },
}

/// Load one already-fetched JSON listing from disk.
pub fn load_items<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, CommandError> {
    let listing: ListingFile<T> = load_value(path)?;
    Ok(match listing {
        ListingFile::Items(items) | ListingFile::Page { items } => items,
    })
}

/// Load one JSON document (a non-listing export, e.g. a menu preview).
pub fn load_value<T: DeserializeOwned>(path: &Path) -> Result<T, CommandError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CommandError::Read {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CommandError::Parse {
        path: path.display().to_string(),
        source,
    })
}
