//! Integration tests for the retail operations toolkit.
//!
//! The tests under `tests/` run the core analyses end-to-end over JSON
//! fixtures shaped exactly like the platform's API pages (`_items` wrapper,
//! `_id`/`_created` field names), i.e. what the fetch collaborator hands the
//! core after pagination.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p retail-ops-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Unwrap a raw API page (`{"_items": [...]}`) into its typed items.
///
/// # Panics
///
/// Panics on shape mismatches; fixtures are test-controlled.
#[must_use]
pub fn items_from_page<T: DeserializeOwned>(page: &str) -> Vec<T> {
    let page: Value = serde_json::from_str(page).expect("fixture is valid JSON");
    let items = page
        .get("_items")
        .cloned()
        .expect("fixture has an _items array");
    serde_json::from_value(items).expect("items deserialize into the listing type")
}
