//! Core types for retail operations listings.
//!
//! This module provides type-safe wrappers for common domain concepts and
//! serde shapes matching the platform's API payloads.

pub mod catalog;
pub mod channel;
pub mod id;
pub mod inventory;
pub mod menu;
pub mod snooze;

pub use catalog::CatalogItem;
pub use channel::{ChannelGroup, ChannelLink};
pub use id::*;
pub use inventory::{InventoryRecord, LocationStock};
pub use menu::{MenuCategory, MenuPreview, MenuProduct, MenuSubCategory};
pub use snooze::{
    OperationReport, ReportUser, ReportWindow, SnoozeAction, SnoozeActor, SnoozeEntry, SnoozeEvent,
};
