//! Missing-inventory report command.
//!
//! # Usage
//!
//! ```bash
//! ro-cli missing-inventory --inventory inv.json --items items.json \
//!     --location 6904bd808e1c9f7c711dfe45 --location-name "SPAR Downtown"
//! ```

use std::path::Path;

use retail_ops_core::analysis::missing::{missing_at_location, report_rows};
use retail_ops_core::{CatalogItem, InventoryIndex, InventoryRecord, LocationId};

use super::{CommandError, load_items};

/// Build the index over the inventory listing and report every catalog item
/// with no inventory at the location.
pub fn run(
    inventory: &Path,
    items: &Path,
    location: &str,
    location_name: Option<&str>,
) -> Result<(), CommandError> {
    let records: Vec<InventoryRecord> = load_items(inventory)?;
    let catalog: Vec<CatalogItem> = load_items(items)?;
    let location = LocationId::from(location);
    tracing::info!(
        "Loaded {} inventory records and {} catalog items",
        records.len(),
        catalog.len()
    );

    let index = InventoryIndex::build(&records);
    tracing::info!("Indexed {} stocked (PLU, location) pairs", index.len());

    let missing = missing_at_location(&catalog, &index, &location);
    if missing.is_empty() {
        tracing::info!("No catalog items are missing inventory at {location}");
        return Ok(());
    }

    let rows = report_rows(&missing, location_name.unwrap_or_else(|| location.as_str()));
    tracing::info!("{} catalog items have no inventory at {location}:", rows.len());
    for row in &rows {
        tracing::info!("  {} | {} | {}", row.location, row.plu, row.name);
    }
    Ok(())
}
