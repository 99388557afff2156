//! Menu analysis commands: item counts and menu coverage.

use std::path::Path;

use retail_ops_core::analysis::menu::{count_menu_items, items_not_in_menu, menu_product_ids};
use retail_ops_core::{CatalogItem, MenuCategory, MenuPreview};

use super::{CommandError, load_items, load_value};

/// Count active and snoozed items in an exported menu preview.
pub fn count(preview: &Path, location_name: &str) -> Result<(), CommandError> {
    let preview: MenuPreview = load_value(preview)?;
    let counts = count_menu_items(&preview, location_name);

    tracing::info!("Categories: {}", counts.categories);
    tracing::info!("Subcategories: {}", counts.subcategories);
    tracing::info!("Active items: {}", counts.active_items);
    tracing::info!("Snoozed items: {}", counts.snoozed_items);
    for row in &counts.snoozed {
        tracing::info!(
            "  snoozed: {} | {} | {} ({})",
            row.category,
            row.name,
            row.plu,
            row.subcategory.as_deref().unwrap_or("-"),
        );
    }
    Ok(())
}

/// List account products that no menu category references.
pub fn coverage(categories: &Path, products: &Path) -> Result<(), CommandError> {
    let categories: Vec<MenuCategory> = load_items(categories)?;
    let products: Vec<CatalogItem> = load_items(products)?;

    let menu_ids = menu_product_ids(&categories);
    tracing::info!("Found {} products across all categories", menu_ids.len());
    tracing::info!("Found {} products in the account", products.len());

    let outside = items_not_in_menu(&products, &menu_ids);
    tracing::info!("Found {} products not in the menu", outside.len());
    for product in &outside {
        tracing::info!(
            "  {} | {}",
            product.name,
            product.plu.as_ref().map_or("-", |plu| plu.as_str()),
        );
    }
    Ok(())
}
