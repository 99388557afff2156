//! Retail Ops Core - pure types and analyses for retail operations data.
//!
//! This crate provides the shared vocabulary and the computations used by
//! the retail operations tooling:
//!
//! - `cli` - Command-line tools that run the analyses over exported listings
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients, no credential handling. Listings (inventory, catalog items, menu
//! previews, operation reports, channel links) are fetched and fully
//! materialized by upstream collaborators before anything here is called.
//! Every analysis is total over its input: entries with missing or empty
//! identifiers are skipped, never an error.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs and payload shapes for the platform's listings
//! - [`index`] - Existence index over an inventory listing
//! - [`analysis`] - Missing-inventory, menu, snooze, and channel analyses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod analysis;
pub mod index;
pub mod types;

pub use index::InventoryIndex;
pub use types::*;
