//! Existence index over an inventory listing.
//!
//! Checking "does this PLU have inventory at this location" against the raw
//! listing is a nested scan per query. Building this index is one pass over
//! the listing; every query after that is a single hash lookup, which is what
//! makes missing-inventory runs over large catalogs viable.

use std::collections::{HashMap, HashSet};

use crate::types::{InventoryRecord, LocationId, Plu};

/// Fast existence lookup over (PLU, location) pairs from an inventory listing.
///
/// Built once per computation run and read-only afterwards. Semantically a
/// set of pairs; stored as a map from PLU to its stocked locations so queries
/// borrow their keys instead of cloning a composite.
///
/// Entries with a missing or empty PLU or location identifier are skipped at
/// build time, so empty identifiers are never members.
#[derive(Debug, Clone, Default)]
pub struct InventoryIndex {
    stocked: HashMap<Plu, HashSet<LocationId>>,
    pairs: usize,
}

impl InventoryIndex {
    /// Build the index in one pass over an already-materialized listing.
    ///
    /// Never fails: malformed records contribute nothing. Duplicate
    /// (PLU, location) pairs collapse into a single entry.
    #[must_use]
    pub fn build(records: &[InventoryRecord]) -> Self {
        let mut index = Self::default();
        for record in records {
            let Some(plu) = record.plu.as_ref().filter(|plu| !plu.is_empty()) else {
                continue;
            };
            for stock in &record.locations {
                let Some(location) = stock.location.as_ref().filter(|loc| !loc.is_empty()) else {
                    continue;
                };
                let locations = index.stocked.entry(plu.clone()).or_default();
                if locations.insert(location.clone()) {
                    index.pairs += 1;
                }
            }
        }
        index
    }

    /// True iff the listing had inventory for `plu` at `location`.
    ///
    /// Empty identifiers always answer false, mirroring the build-time skip.
    #[must_use]
    pub fn contains(&self, plu: &Plu, location: &LocationId) -> bool {
        if plu.is_empty() || location.is_empty() {
            return false;
        }
        self.stocked
            .get(plu)
            .is_some_and(|locations| locations.contains(location))
    }

    /// Number of distinct (PLU, location) pairs in the index.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.pairs
    }

    /// True when no pair was indexed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.pairs == 0
    }
}
