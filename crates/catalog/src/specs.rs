//! Specification merging across heterogeneous products.
//!
//! Comparison tables show one row per distinct specification key across the
//! selected products; a product that lacks a key renders the sentinel.

use std::collections::HashSet;

use crate::product::Product;

/// Placeholder rendered when a product has no value for a specification key.
pub const SPEC_VALUE_ABSENT: &str = "—";

/// Ordered union of distinct specification keys across `products`.
///
/// First-seen order: products in the given order, then each product's
/// specifications in their given order. Runs in O(total spec entries).
pub fn merged_spec_keys(products: &[Product]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut keys = Vec::new();

    for product in products {
        for entry in &product.specifications {
            if seen.insert(entry.key.as_str()) {
                keys.push(entry.key.clone());
            }
        }
    }

    keys
}

/// Value of the first specification entry matching `key`, or the sentinel.
pub fn spec_value_for<'a>(product: &'a Product, key: &str) -> &'a str {
    product
        .specifications
        .iter()
        .find(|entry| entry.key == key)
        .map(|entry| entry.value.as_str())
        .unwrap_or(SPEC_VALUE_ABSENT)
}
