//! Menu preview payload shapes.
//!
//! A menu preview is the platform's denormalized view of one published menu:
//! a flat product map plus a category tree referencing products by ID.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::id::{Plu, ProductId};

/// A product as it appears in a menu preview's product map.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuProduct {
    /// Display name.
    pub name: Option<String>,
    /// Price look-up code.
    pub plu: Option<Plu>,
    /// Whether the product is currently snoozed (hidden from ordering).
    #[serde(default)]
    pub snoozed: bool,
}

/// A subcategory nested under a menu category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuSubCategory {
    /// Display name.
    pub name: Option<String>,
    /// Product IDs listed directly in this subcategory.
    #[serde(default)]
    pub products: Vec<ProductId>,
}

/// A top-level menu category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuCategory {
    /// Display name.
    pub name: Option<String>,
    /// Product IDs listed directly in this category.
    #[serde(default)]
    pub products: Vec<ProductId>,
    /// Nested subcategories.
    #[serde(rename = "subCategories", default)]
    pub sub_categories: Vec<MenuSubCategory>,
}

/// A full menu preview: product map plus category tree.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuPreview {
    /// All products referenced by the menu, keyed by product ID.
    #[serde(default)]
    pub products: HashMap<ProductId, MenuProduct>,
    /// The category tree.
    #[serde(default)]
    pub categories: Vec<MenuCategory>,
}
