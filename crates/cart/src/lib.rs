//! Cart domain module.
//!
//! Line items and the totals aggregation shared by the cart page, the cart
//! modal, and checkout. Pure deterministic logic (no IO, no HTTP, no
//! storage); all functions are total and an empty cart yields all-zero
//! totals.

pub mod totals;

pub use totals::{
    CartTotals, LineItem, PricingPolicy, grand_total, item_count, shipping_cost, subtotal, tax,
};
