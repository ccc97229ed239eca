//! Comparison domain module.
//!
//! A bounded, order-preserving set of product snapshots the shopper has
//! picked for side-by-side comparison. Rejections are returned as values so
//! the UI can show an inline message; no IO, no storage.

pub mod set;

pub use set::{CompareError, ComparisonSet, MAX_MEMBERS};
