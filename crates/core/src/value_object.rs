//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared entirely by their attribute
/// values; identity does not matter. `CartTotals { subtotal: 100, .. }` is a
/// value object, a catalog product with an id is not. To "modify" one, build
/// a new one — which also makes them safe to share across threads.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
