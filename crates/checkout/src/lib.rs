//! Checkout domain module.
//!
//! Shipping-address validation and assembly of the order payload sent to the
//! order-creation endpoint, plus the slice of the creation response the
//! confirmation view renders. Validation failures are collected into a
//! field-keyed map, never thrown, so a form can highlight every invalid
//! field at once.

pub mod order;

pub use order::{
    FieldErrors, OrderConfirmation, OrderPayload, PaymentMethod, ShippingAddress,
    build_order_payload,
};
