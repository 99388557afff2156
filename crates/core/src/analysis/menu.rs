//! Menu analyses: item/snooze counts and menu coverage.

use std::collections::HashSet;

use serde::Serialize;

use crate::types::{CatalogItem, MenuCategory, MenuPreview, ProductId};

/// Placeholder name for products a menu references but does not define.
const UNKNOWN_PRODUCT: &str = "Unknown Product";
/// Placeholder PLU for products without one.
const UNKNOWN_PLU: &str = "N/A";

/// Where a counted menu item sits and what it is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItemRow {
    /// Display name of the location the preview was rendered for.
    pub location: String,
    /// Category the item was counted under.
    pub category: String,
    /// Subcategory, when the item sits in one.
    pub subcategory: Option<String>,
    /// Product display name.
    pub name: String,
    /// Product PLU.
    pub plu: String,
    /// Product ID referenced by the category tree.
    pub product_id: ProductId,
}

/// Totals for one menu preview.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MenuCounts {
    /// Top-level categories in the preview.
    pub categories: usize,
    /// Subcategories across all categories.
    pub subcategories: usize,
    /// Items currently orderable. Does not include snoozed items.
    pub active_items: usize,
    /// Items currently snoozed.
    pub snoozed_items: usize,
    /// One row per active item.
    pub active: Vec<MenuItemRow>,
    /// One row per snoozed item.
    pub snoozed: Vec<MenuItemRow>,
}

/// Count every product referenced by the preview's category tree, split into
/// active and snoozed using the preview's product map.
///
/// A product the tree references but the map does not define counts as active
/// under placeholder name/PLU, matching how the platform renders such gaps.
#[must_use]
pub fn count_menu_items(preview: &MenuPreview, location_name: &str) -> MenuCounts {
    let mut counts = MenuCounts {
        categories: preview.categories.len(),
        ..MenuCounts::default()
    };
    for category in &preview.categories {
        let category_name = category.name.as_deref().unwrap_or("Unnamed Category");
        counts.subcategories += category.sub_categories.len();
        for sub in &category.sub_categories {
            let sub_name = sub.name.as_deref().unwrap_or("Unnamed Subcategory");
            for product_id in &sub.products {
                tally(
                    &mut counts,
                    preview,
                    location_name,
                    category_name,
                    Some(sub_name),
                    product_id,
                );
            }
        }
        for product_id in &category.products {
            tally(
                &mut counts,
                preview,
                location_name,
                category_name,
                None,
                product_id,
            );
        }
    }
    counts
}

fn tally(
    counts: &mut MenuCounts,
    preview: &MenuPreview,
    location: &str,
    category: &str,
    subcategory: Option<&str>,
    product_id: &ProductId,
) {
    let product = preview.products.get(product_id);
    let row = MenuItemRow {
        location: location.to_owned(),
        category: category.to_owned(),
        subcategory: subcategory.map(str::to_owned),
        name: product
            .and_then(|p| p.name.clone())
            .unwrap_or_else(|| UNKNOWN_PRODUCT.to_owned()),
        plu: product
            .and_then(|p| p.plu.as_ref())
            .map_or_else(|| UNKNOWN_PLU.to_owned(), |plu| plu.as_str().to_owned()),
        product_id: product_id.clone(),
    };
    if product.is_some_and(|p| p.snoozed) {
        counts.snoozed_items += 1;
        counts.snoozed.push(row);
    } else {
        counts.active_items += 1;
        counts.active.push(row);
    }
}

/// Every product ID referenced by `categories`, subcategories included.
#[must_use]
pub fn menu_product_ids(categories: &[MenuCategory]) -> HashSet<ProductId> {
    let mut ids = HashSet::new();
    for category in categories {
        ids.extend(category.products.iter().cloned());
        for sub in &category.sub_categories {
            ids.extend(sub.products.iter().cloned());
        }
    }
    ids
}

/// Account products no menu category references, in listing order.
///
/// Products without an entity ID cannot be matched against the category tree
/// and are skipped, consistent with the crate-wide empty-identifier policy.
#[must_use]
pub fn items_not_in_menu(
    products: &[CatalogItem],
    menu_ids: &HashSet<ProductId>,
) -> Vec<CatalogItem> {
    products
        .iter()
        .filter(|product| {
            product
                .id
                .as_ref()
                .is_some_and(|id| !id.is_empty() && !menu_ids.contains(id))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MenuProduct, MenuSubCategory};
    use std::collections::HashMap;

    fn pid(id: &str) -> ProductId {
        ProductId::new(id)
    }

    fn product(name: &str, plu: &str, snoozed: bool) -> MenuProduct {
        MenuProduct {
            name: Some(name.to_owned()),
            plu: Some(plu.into()),
            snoozed,
        }
    }

    fn sample_preview() -> MenuPreview {
        MenuPreview {
            products: HashMap::from([
                (pid("p1"), product("Cola", "100", false)),
                (pid("p2"), product("Chips", "200", true)),
                (pid("p3"), product("Bread", "300", false)),
            ]),
            categories: vec![MenuCategory {
                name: Some("Grocery".to_owned()),
                products: vec![pid("p3")],
                sub_categories: vec![MenuSubCategory {
                    name: Some("Snacks".to_owned()),
                    products: vec![pid("p1"), pid("p2")],
                }],
            }],
        }
    }

    #[test]
    fn test_counts_split_active_and_snoozed() {
        let counts = count_menu_items(&sample_preview(), "Store A");
        assert_eq!(counts.categories, 1);
        assert_eq!(counts.subcategories, 1);
        assert_eq!(counts.active_items, 2);
        assert_eq!(counts.snoozed_items, 1);
        let snoozed = counts.snoozed.first().expect("one snoozed row");
        assert_eq!(snoozed.name, "Chips");
        assert_eq!(snoozed.subcategory.as_deref(), Some("Snacks"));
    }

    #[test]
    fn test_direct_category_items_have_no_subcategory() {
        let counts = count_menu_items(&sample_preview(), "Store A");
        let bread = counts
            .active
            .iter()
            .find(|row| row.name == "Bread")
            .expect("bread row");
        assert_eq!(bread.subcategory, None);
        assert_eq!(bread.category, "Grocery");
    }

    #[test]
    fn test_unmapped_product_counts_as_active_placeholder() {
        let preview = MenuPreview {
            products: HashMap::new(),
            categories: vec![MenuCategory {
                name: None,
                products: vec![pid("ghost")],
                sub_categories: Vec::new(),
            }],
        };
        let counts = count_menu_items(&preview, "Store A");
        assert_eq!(counts.active_items, 1);
        let row = counts.active.first().expect("one row");
        assert_eq!(row.name, UNKNOWN_PRODUCT);
        assert_eq!(row.plu, UNKNOWN_PLU);
        assert_eq!(row.category, "Unnamed Category");
    }

    #[test]
    fn test_menu_product_ids_walks_subcategories() {
        let ids = menu_product_ids(&sample_preview().categories);
        assert_eq!(ids, HashSet::from([pid("p1"), pid("p2"), pid("p3")]));
    }

    #[test]
    fn test_items_not_in_menu() {
        let menu_ids = HashSet::from([pid("p1")]);
        let products = vec![
            CatalogItem {
                id: Some(pid("p1")),
                plu: Some("100".into()),
                name: "Cola".to_owned(),
            },
            CatalogItem {
                id: Some(pid("p9")),
                plu: Some("900".into()),
                name: "Juice".to_owned(),
            },
            CatalogItem {
                id: None,
                plu: Some("500".into()),
                name: "No id".to_owned(),
            },
        ];
        let outside = items_not_in_menu(&products, &menu_ids);
        assert_eq!(outside.len(), 1);
        assert_eq!(outside.first().map(|p| p.name.as_str()), Some("Juice"));
    }
}
