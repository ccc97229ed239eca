//! `storefront-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! identifiers, money/quantity math, and the value-object marker.

pub mod id;
pub mod money;
pub mod value_object;

pub use id::ProductId;
pub use money::{discount_percent, format_currency};
pub use value_object::ValueObject;
