//! Catalog domain module.
//!
//! This crate contains the read-only product snapshot handed over by the
//! remote catalog API, plus the specification merger used to build
//! side-by-side comparison tables. Pure deterministic logic (no IO, no HTTP,
//! no storage).

pub mod product;
pub mod specs;

pub use product::{Product, SpecEntry};
pub use specs::{SPEC_VALUE_ABSENT, merged_spec_keys, spec_value_for};
