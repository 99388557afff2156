//! Inventory listing payload shapes.

use serde::{Deserialize, Serialize};

use super::id::{LocationId, Plu};

/// One stocked location within an inventory record.
///
/// The upstream payload carries more fields per location (product reference,
/// quantities); only the location identifier matters for existence checks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationStock {
    /// Location ID this record is stocked at.
    pub location: Option<LocationId>,
}

/// A single entry from the inventory listing endpoint.
///
/// Malformed entries (missing `plu`, empty `locations`) deserialize fine and
/// simply contribute nothing to the [`crate::InventoryIndex`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryRecord {
    /// Price look-up code of the stocked product.
    pub plu: Option<Plu>,
    /// Locations the product is stocked at.
    #[serde(default)]
    pub locations: Vec<LocationStock>,
}

impl InventoryRecord {
    /// Convenience constructor for a record stocked at the given locations.
    #[must_use]
    pub fn new(plu: impl Into<Plu>, locations: impl IntoIterator<Item = LocationId>) -> Self {
        Self {
            plu: Some(plu.into()),
            locations: locations
                .into_iter()
                .map(|location| LocationStock {
                    location: Some(location),
                })
                .collect(),
        }
    }
}
