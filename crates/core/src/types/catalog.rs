//! Catalog item payload shapes.

use serde::{Deserialize, Serialize};

use super::id::{Plu, ProductId};

/// A catalog item from the items listing.
///
/// Used both for the per-account product listing and for the catalog listing
/// a missing-inventory run filters; the platform returns the same shape for
/// both, with the entity ID under `_id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Entity ID of the item.
    #[serde(rename = "_id")]
    pub id: Option<ProductId>,
    /// Price look-up code, shared with inventory records.
    pub plu: Option<Plu>,
    /// Display name.
    #[serde(default)]
    pub name: String,
}

impl CatalogItem {
    /// Convenience constructor for an item with a PLU and a name.
    #[must_use]
    pub fn new(plu: impl Into<Plu>, name: impl Into<String>) -> Self {
        Self {
            id: None,
            plu: Some(plu.into()),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_upstream_shape() {
        let json = r#"{"_id": "65a1", "plu": "123", "name": "Product A", "visible": true}"#;
        let item: CatalogItem = serde_json::from_str(json).expect("deserializes");
        assert_eq!(item.id, Some(ProductId::new("65a1")));
        assert_eq!(item.plu, Some(Plu::new("123")));
        assert_eq!(item.name, "Product A");
    }

    #[test]
    fn test_name_defaults_to_empty() {
        let item: CatalogItem = serde_json::from_str(r#"{"plu": "9"}"#).expect("deserializes");
        assert_eq!(item.name, "");
        assert_eq!(item.id, None);
    }
}
