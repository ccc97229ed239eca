use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_core::{ProductId, discount_percent};

/// One `{key, value}` specification pair.
///
/// Keys are not guaranteed unique within a single product in the source data;
/// lookups treat the list as a mapping where the first entry for a key wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecEntry {
    pub key: String,
    pub value: String,
}

impl SpecEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Read-only product snapshot as decoded from the catalog API.
///
/// Snapshots are value-like: carts and comparison sets copy them, so catalog
/// changes elsewhere never retroactively alter an in-progress cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// Price in smallest currency unit.
    #[serde(default)]
    pub price: u64,
    /// Strike-through price; only a discount when strictly above `price`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<u64>,
    /// Units available; 0 means out of stock.
    #[serde(default)]
    pub quantity: u32,
    /// Ordered image URLs, first is primary.
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub specifications: Vec<SpecEntry>,
    pub created_at: DateTime<Utc>,
}

impl Product {
    pub fn is_in_stock(&self) -> bool {
        self.quantity > 0
    }

    pub fn has_discount(&self) -> bool {
        self.original_price.is_some_and(|original| original > self.price)
    }

    /// Rounded percentage saved against `original_price`; 0 when not discounted.
    pub fn discount_percent(&self) -> u8 {
        discount_percent(self.original_price, self.price)
    }

    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}
