use serde::{Deserialize, Serialize};
use thiserror::Error;

use storefront_catalog::{Product, merged_spec_keys, spec_value_for};
use storefront_core::ProductId;

/// Upper bound on products compared side by side.
pub const MAX_MEMBERS: usize = 4;

/// Why a product could not be added to the comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CompareError {
    #[error("comparison is limited to {MAX_MEMBERS} products")]
    AtCapacity,

    #[error("product is already in the comparison")]
    Duplicate,

    #[error("only products from the same category can be compared")]
    CategoryMismatch,
}

/// Ordered collection of up to [`MAX_MEMBERS`] product snapshots.
///
/// Invariants: member ids are unique, and all members share the first
/// member's category once a second one is added. A rejected `add` leaves the
/// set untouched. Session-scoped, single-writer; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonSet {
    members: Vec<Product>,
}

impl ComparisonSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a comparison from one externally-supplied product.
    pub fn seeded(product: Product) -> Self {
        Self {
            members: vec![product],
        }
    }

    pub fn members(&self) -> &[Product] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.members.len() >= MAX_MEMBERS
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.members.iter().any(|member| &member.id == id)
    }

    /// Category every member must share; `None` while the set is empty.
    pub fn category(&self) -> Option<&str> {
        self.members.first().map(|member| member.category.as_str())
    }

    /// Append `product`, or reject without mutating.
    pub fn add(&mut self, product: Product) -> Result<(), CompareError> {
        if self.is_full() {
            return Err(CompareError::AtCapacity);
        }
        if self.contains(&product.id) {
            return Err(CompareError::Duplicate);
        }
        if let Some(category) = self.category() {
            if product.category != category {
                return Err(CompareError::CategoryMismatch);
            }
        }

        self.members.push(product);
        Ok(())
    }

    /// Remove the member with `id`; no-op when absent.
    pub fn remove(&mut self, id: &ProductId) {
        self.members.retain(|member| &member.id != id);
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }

    /// Ordered union of specification keys across the current members.
    pub fn spec_keys(&self) -> Vec<String> {
        merged_spec_keys(&self.members)
    }

    /// Table cell for `product` at row `key` (sentinel when absent).
    pub fn value_for<'a>(&self, product: &'a Product, key: &str) -> &'a str {
        spec_value_for(product, key)
    }
}
