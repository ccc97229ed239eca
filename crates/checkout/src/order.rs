use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use storefront_cart::{CartTotals, LineItem, PricingPolicy};
use storefront_core::ValueObject;

/// Validation failures keyed by field name, one message per field.
pub type FieldErrors = BTreeMap<&'static str, String>;

/// Where the order ships to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    #[serde(default)]
    pub country: String,
}

impl ValueObject for ShippingAddress {}

impl ShippingAddress {
    /// Check every field and collect one error per invalid field.
    ///
    /// Not fail-fast: the form shows all problems in a single pass. An empty
    /// map means the address is accepted.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        let required: [(&'static str, &str); 8] = [
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("street", &self.street),
            ("city", &self.city),
            ("state", &self.state),
            ("postalCode", &self.postal_code),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                errors.insert(field, "this field is required".to_string());
            }
        }

        if !self.email.trim().is_empty() && !is_plausible_email(self.email.trim()) {
            errors.insert("email", "enter a valid email address".to_string());
        }
        if !self.phone.trim().is_empty() && !is_plausible_phone(self.phone.trim()) {
            errors.insert("phone", "enter a valid phone number".to_string());
        }

        errors
    }
}

/// Minimal `local@domain.tld` shape check; not RFC validation.
fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || email.contains(char::is_whitespace) {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

/// Digits plus common punctuation, with at least 7 digits overall.
fn is_plausible_phone(phone: &str) -> bool {
    let allowed = |c: char| c.is_ascii_digit() || matches!(c, '+' | '-' | '(' | ')' | '.' | ' ');
    if !phone.chars().all(allowed) {
        return false;
    }
    phone.chars().filter(char::is_ascii_digit).count() >= 7
}

/// How the order is paid. This storefront only supports cash on delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CashOnDelivery,
}

impl core::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::CashOnDelivery => write!(f, "Cash on Delivery"),
        }
    }
}

/// Body of the order-creation request.
///
/// Built once at checkout time and never mutated after submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    pub shipping_address: ShippingAddress,
    pub notes: String,
    pub payment_method: PaymentMethod,
    pub totals: CartTotals,
}

/// Slice of the order-creation response the confirmation view renders.
///
/// The API returns more fields; only the identifier, totals, and status are
/// consumed here, the rest is ignored on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    pub id: String,
    pub subtotal: u64,
    pub shipping_cost: u64,
    pub tax: u64,
    pub total: u64,
    pub status: String,
}

/// Validate the address and assemble the order-creation payload.
///
/// On any validation failure the field-keyed error map is returned and no
/// totals are computed.
pub fn build_order_payload(
    items: &[LineItem],
    address: &ShippingAddress,
    notes: &str,
    policy: &PricingPolicy,
) -> Result<OrderPayload, FieldErrors> {
    let errors = address.validate();
    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(OrderPayload {
        shipping_address: address.clone(),
        notes: notes.trim().to_string(),
        payment_method: PaymentMethod::CashOnDelivery,
        totals: CartTotals::compute(items, policy),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use storefront_catalog::Product;
    use storefront_core::ProductId;

    fn priced_product(id: &str, price: u64) -> Product {
        Product {
            id: ProductId::new(id),
            name: id.to_string(),
            category: "general".to_string(),
            brand: None,
            price,
            original_price: None,
            quantity: 10,
            images: Vec::new(),
            specifications: Vec::new(),
            created_at: Utc::now(),
        }
    }

    fn cart() -> Vec<LineItem> {
        vec![
            LineItem::new(priced_product("a", 3000), 2),
            LineItem::new(priced_product("b", 1500), 1),
        ]
    }

    fn valid_address() -> ShippingAddress {
        ShippingAddress {
            first_name: "Ayesha".to_string(),
            last_name: "Khan".to_string(),
            email: "ayesha@example.com".to_string(),
            phone: "+92 300 1234567".to_string(),
            street: "14 Mall Road".to_string(),
            city: "Lahore".to_string(),
            state: "Punjab".to_string(),
            postal_code: "54000".to_string(),
            country: "PK".to_string(),
        }
    }

    fn policy() -> PricingPolicy {
        PricingPolicy::new(5000, 200, 0.05)
    }

    #[test]
    fn valid_checkout_produces_payload_with_totals() {
        let payload =
            build_order_payload(&cart(), &valid_address(), "  leave at the gate  ", &policy())
                .unwrap();

        assert_eq!(payload.payment_method, PaymentMethod::CashOnDelivery);
        assert_eq!(payload.notes, "leave at the gate");
        assert_eq!(payload.totals.subtotal, 7500);
        assert_eq!(payload.totals.shipping_cost, 0);
        assert_eq!(payload.totals.tax, 375);
        assert_eq!(payload.totals.total, 7875);
        assert_eq!(payload.totals.item_count, 3);
    }

    #[test]
    fn empty_phone_is_reported_and_no_payload_is_built() {
        let mut address = valid_address();
        address.phone = String::new();

        let errors = build_order_payload(&cart(), &address, "", &policy()).unwrap_err();
        assert!(errors.contains_key("phone"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn errors_are_collected_across_all_fields() {
        let address = ShippingAddress {
            email: "not-an-email".to_string(),
            phone: "call me".to_string(),
            ..ShippingAddress::default()
        };

        let errors = address.validate();
        for field in [
            "firstName",
            "lastName",
            "email",
            "phone",
            "street",
            "city",
            "state",
            "postalCode",
        ] {
            assert!(errors.contains_key(field), "missing error for {field}");
        }
    }

    #[test]
    fn email_shape_is_checked() {
        let mut address = valid_address();
        for bad in ["plainaddress", "a@b", "a b@c.com", "@example.com", "a@@b.com"] {
            address.email = bad.to_string();
            assert!(address.validate().contains_key("email"), "accepted {bad}");
        }

        address.email = "shopper@store.example.co".to_string();
        assert!(address.validate().is_empty());
    }

    #[test]
    fn phone_shape_is_checked() {
        let mut address = valid_address();
        for bad in ["123", "abc1234567", "0300#1234567"] {
            address.phone = bad.to_string();
            assert!(address.validate().contains_key("phone"), "accepted {bad}");
        }

        address.phone = "(042) 111-222-333".to_string();
        assert!(address.validate().is_empty());
    }

    #[test]
    fn country_is_not_required() {
        let mut address = valid_address();
        address.country = String::new();
        assert!(address.validate().is_empty());
    }

    #[test]
    fn payload_serializes_with_the_expected_wire_shape() {
        let payload = build_order_payload(&cart(), &valid_address(), "", &policy()).unwrap();
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["paymentMethod"], "cash_on_delivery");
        assert_eq!(json["shippingAddress"]["postalCode"], "54000");
        assert_eq!(json["totals"]["itemCount"], 3);
        assert_eq!(json["totals"]["shippingCost"], 0);
    }

    #[test]
    fn confirmation_decodes_only_the_fields_it_renders() {
        let confirmation: OrderConfirmation = serde_json::from_str(
            r#"{
                "id": "ord-991",
                "subtotal": 7500,
                "shippingCost": 0,
                "tax": 375,
                "total": 7875,
                "status": "pending",
                "courier": "tcs",
                "placedAt": "2026-02-01T10:00:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(confirmation.id, "ord-991");
        assert_eq!(confirmation.total, 7875);
        assert_eq!(confirmation.status, "pending");
    }
}
