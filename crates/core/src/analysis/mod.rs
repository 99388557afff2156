//! Pure analyses over already-fetched listings.
//!
//! Each submodule answers one operational question:
//!
//! - [`missing`] - which catalog items have no inventory at a location
//! - [`menu`] - menu item counts, snooze splits, and menu coverage
//! - [`snooze`] - per-PLU snooze history from operation reports
//! - [`channels`] - channel links grouped per channel
//!
//! Every function here is total: entries with missing or empty identifiers
//! are skipped, never an error, and inputs are never mutated.

pub mod channels;
pub mod menu;
pub mod missing;
pub mod snooze;

pub use channels::{group_by_channel, links_for_channel};
pub use menu::{MenuCounts, MenuItemRow, count_menu_items, items_not_in_menu, menu_product_ids};
pub use missing::{MissingInventoryRow, missing_at_location, missing_by_location, report_rows};
pub use snooze::snooze_events_for_plu;
