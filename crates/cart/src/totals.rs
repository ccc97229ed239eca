use serde::{Deserialize, Serialize};

use storefront_catalog::Product;
use storefront_core::ValueObject;

/// One cart entry: a product snapshot and how many units of it.
///
/// The caller clamps quantity to the available stock before handing items
/// over; aggregation here only guards against non-positive quantities so
/// derived totals can never go negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub product: Product,
    /// Decodes as 1 when the API record omits it.
    #[serde(default = "default_quantity")]
    pub quantity: i64,
}

fn default_quantity() -> i64 {
    1
}

impl LineItem {
    pub fn new(product: Product, quantity: i64) -> Self {
        Self { product, quantity }
    }

    /// Price × quantity for this line, in smallest currency unit.
    pub fn line_total(&self) -> u64 {
        let quantity = self.quantity.max(0) as u64;
        self.product.price.saturating_mul(quantity)
    }
}

/// Shipping/tax parameters for one totals computation.
///
/// The storefront historically used different threshold/fee constants per
/// view, so there is deliberately no global default: each call site says
/// which policy it prices under. Currency-agnostic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingPolicy {
    /// Subtotal must strictly exceed this for shipping to be free.
    pub free_shipping_threshold: u64,
    pub flat_shipping_fee: u64,
    /// Fraction of the subtotal, e.g. 0.05.
    pub tax_rate: f64,
}

impl PricingPolicy {
    pub fn new(free_shipping_threshold: u64, flat_shipping_fee: u64, tax_rate: f64) -> Self {
        Self {
            free_shipping_threshold,
            flat_shipping_fee,
            tax_rate,
        }
    }
}

impl ValueObject for PricingPolicy {}

/// Sum of line totals; empty list is 0.
pub fn subtotal(items: &[LineItem]) -> u64 {
    items.iter().map(LineItem::line_total).sum()
}

/// Flat fee unless the subtotal strictly exceeds the free threshold.
///
/// A subtotal exactly equal to the threshold still pays the fee.
pub fn shipping_cost(subtotal: u64, free_threshold: u64, flat_fee: u64) -> u64 {
    if subtotal > free_threshold { 0 } else { flat_fee }
}

/// Tax on the subtotal, rounded to the nearest unit.
///
/// Non-finite or non-positive rates yield 0 so the function stays total.
pub fn tax(subtotal: u64, rate: f64) -> u64 {
    if !rate.is_finite() || rate <= 0.0 {
        return 0;
    }
    (subtotal as f64 * rate).round() as u64
}

pub fn grand_total(subtotal: u64, shipping: u64, tax: u64) -> u64 {
    subtotal.saturating_add(shipping).saturating_add(tax)
}

/// Total units across the cart; non-positive quantities contribute nothing.
pub fn item_count(items: &[LineItem]) -> u64 {
    items.iter().map(|item| item.quantity.max(0) as u64).sum()
}

/// Derived monetary figures for one cart state under one pricing policy.
///
/// Immutable per computation; recompute rather than patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub subtotal: u64,
    pub shipping_cost: u64,
    pub tax: u64,
    pub total: u64,
    pub item_count: u64,
}

impl CartTotals {
    pub fn compute(items: &[LineItem], policy: &PricingPolicy) -> Self {
        // Nothing to ship and nothing to tax: an empty cart is all zeros, it
        // does not owe the flat shipping fee.
        if items.is_empty() {
            return Self::zero();
        }

        let subtotal = subtotal(items);
        let shipping_cost = shipping_cost(
            subtotal,
            policy.free_shipping_threshold,
            policy.flat_shipping_fee,
        );
        let tax = tax(subtotal, policy.tax_rate);

        Self {
            subtotal,
            shipping_cost,
            tax,
            total: grand_total(subtotal, shipping_cost, tax),
            item_count: item_count(items),
        }
    }

    pub fn zero() -> Self {
        Self {
            subtotal: 0,
            shipping_cost: 0,
            tax: 0,
            total: 0,
            item_count: 0,
        }
    }
}

impl ValueObject for CartTotals {}
