//! Missing-inventory computation.
//!
//! A catalog item is "missing" at a location when the inventory listing has
//! no entry for its PLU at that location. The catalog and the inventory come
//! from separate listings, so the check runs against a prebuilt
//! [`InventoryIndex`] rather than rescanning the inventory per item.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::index::InventoryIndex;
use crate::types::{CatalogItem, LocationId};

/// Catalog items with no inventory at `location`, in listing order.
///
/// Items without a PLU cannot be checked against the index and are left out
/// of the result rather than flagged.
#[must_use]
pub fn missing_at_location(
    items: &[CatalogItem],
    index: &InventoryIndex,
    location: &LocationId,
) -> Vec<CatalogItem> {
    items
        .iter()
        .filter(|item| match item.plu.as_ref() {
            Some(plu) if !plu.is_empty() => !index.contains(plu, location),
            _ => false,
        })
        .cloned()
        .collect()
}

/// Missing items per location, for a batch run over one account.
///
/// One index build is amortized over every location. Locations where nothing
/// is missing get no entry.
#[must_use]
pub fn missing_by_location(
    items: &[CatalogItem],
    index: &InventoryIndex,
    locations: &[LocationId],
) -> BTreeMap<LocationId, Vec<CatalogItem>> {
    let mut missing = BTreeMap::new();
    for location in locations {
        let at_location = missing_at_location(items, index, location);
        if !at_location.is_empty() {
            missing.insert(location.clone(), at_location);
        }
    }
    missing
}

/// One row of the missing-inventory report handed to the export collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingInventoryRow {
    /// Display name of the location the report was run for.
    pub location: String,
    /// PLU of the missing item.
    pub plu: String,
    /// Display name of the missing item.
    pub name: String,
}

/// Shape missing items into report rows under the location's display name.
///
/// The core has no opinion on the output format; exporters turn these rows
/// into whatever delimited or rendered form they need.
#[must_use]
pub fn report_rows(missing: &[CatalogItem], location_name: &str) -> Vec<MissingInventoryRow> {
    missing
        .iter()
        .map(|item| MissingInventoryRow {
            location: location_name.to_owned(),
            plu: item
                .plu
                .as_ref()
                .map_or_else(String::new, |plu| plu.as_str().to_owned()),
            name: item.name.clone(),
        })
        .collect()
}
