//! Checkout: a pure derivation over selected cart lines.
//!
//! Checkout has no store of its own. It takes the lines the user toggled as
//! selected (client-only UI state), computes pricing, validates the customer
//! details, and posts exactly one order record. On failure nothing local is
//! mutated - the order either exists server-side or the client believes it
//! does not.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::instrument;

use planta_core::{CartItem, Order, OrderCustomer, ShippingMethod};

use crate::api::{ApiError, ShopApi};

/// Status label a freshly placed order carries.
pub const ORDER_PLACED_STATUS: &str = "order placed";

/// Display color paired with [`ORDER_PLACED_STATUS`].
pub const ORDER_PLACED_COLOR: &str = "green";

/// Errors that can occur while checking out.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Required customer fields are blank; no network call was made.
    #[error("missing required customer fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// Submitting the order to the backend failed.
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// The two shipping presets offered at checkout.
///
/// The label-to-fee mapping is a configuration value, not a constant: the
/// source screens this was modeled on disagreed about which speed label
/// carries the higher fee, so integrators must confirm the table below
/// before going live.
#[derive(Debug, Clone, PartialEq)]
pub struct ShippingTable {
    /// Cheaper, slower option.
    pub standard: ShippingMethod,
    /// Pricier, faster option.
    pub express: ShippingMethod,
}

impl Default for ShippingTable {
    fn default() -> Self {
        Self {
            standard: ShippingMethod {
                kind: "standard".to_string(),
                fee: Decimal::from(15_000),
                estimate: "5-7 days".to_string(),
            },
            express: ShippingMethod {
                kind: "express".to_string(),
                fee: Decimal::from(50_000),
                estimate: "4-6 days".to_string(),
            },
        }
    }
}

/// Everything the checkout screen collected before the submit tap.
#[derive(Debug, Clone)]
pub struct CheckoutForm {
    /// The cart lines the user explicitly selected; not the whole cart.
    pub selected: Vec<CartItem>,
    /// Customer details from the form.
    pub customer: OrderCustomer,
    /// Chosen shipping preset.
    pub shipping: ShippingMethod,
    /// Payment method label; no gateway sits behind it.
    pub payment_method: String,
}

impl CheckoutForm {
    /// Sum of `price x quantity` over the selected lines.
    ///
    /// Lines with absent price or quantity contribute zero; that is a
    /// defensive default, not an error.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        subtotal(&self.selected)
    }

    /// Subtotal plus the shipping fee.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.subtotal() + self.shipping.fee
    }

    /// Check the required customer fields: name, address, phone.
    ///
    /// Email is not required.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::MissingFields`] naming every blank field.
    pub fn validate(&self) -> Result<(), CheckoutError> {
        let mut missing = Vec::new();
        if self.customer.name.trim().is_empty() {
            missing.push("name");
        }
        if self.customer.address.trim().is_empty() {
            missing.push("address");
        }
        if self.customer.phone.trim().is_empty() {
            missing.push("phone");
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(CheckoutError::MissingFields(missing))
        }
    }

    /// Construct the order snapshot for a given submission instant.
    ///
    /// The id is the instant's Unix timestamp in milliseconds; the selected
    /// lines are embedded verbatim as values, immune to later cart or
    /// catalog changes.
    #[must_use]
    pub fn build_order_at(&self, at: DateTime<Utc>) -> Order {
        Order {
            id: at.timestamp_millis().to_string(),
            date: at.format("%d/%m/%Y").to_string(),
            status: ORDER_PLACED_STATUS.to_string(),
            status_color: ORDER_PLACED_COLOR.to_string(),
            products: self.selected.clone(),
            customer: self.customer.clone(),
            shipping_method: self.shipping.clone(),
            payment_method: self.payment_method.clone(),
            total: self.total(),
        }
    }

    /// Validate, build the snapshot, and post it as a single create call.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::MissingFields`] before any network call if
    /// validation fails, or [`CheckoutError::Api`] if the create fails. In
    /// both cases the cart and selection are untouched; there is no retry
    /// and no partial state mutation.
    #[instrument(skip(self, api), fields(lines = self.selected.len()))]
    pub async fn submit(&self, api: &ShopApi) -> Result<Order, CheckoutError> {
        self.validate()?;

        let order = self.build_order_at(Utc::now());
        api.create_order(&order).await?;
        Ok(order)
    }
}

/// Sum of `price x quantity` over a set of lines.
#[must_use]
pub fn subtotal(lines: &[CartItem]) -> Decimal {
    lines.iter().map(CartItem::line_total).sum()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn line(id: &str, price: i64, quantity: i64) -> CartItem {
        CartItem {
            id: id.to_string(),
            name: format!("plant-{id}"),
            price: Decimal::from(price),
            image: String::new(),
            quantity,
        }
    }

    fn form(selected: Vec<CartItem>) -> CheckoutForm {
        CheckoutForm {
            selected,
            customer: OrderCustomer {
                name: "Lan".to_string(),
                email: String::new(),
                address: "12 Hang Gai".to_string(),
                phone: "0900000000".to_string(),
            },
            shipping: ShippingTable::default().standard,
            payment_method: "visa".to_string(),
        }
    }

    #[test]
    fn test_total_is_subtotal_plus_shipping_fee() {
        let form = form(vec![line("1", 10_000, 2), line("2", 5_000, 1)]);
        assert_eq!(form.subtotal(), Decimal::from(25_000));
        // 10000*2 + 5000*1 + 15000 shipping
        assert_eq!(form.total(), Decimal::from(40_000));
    }

    #[test]
    fn test_subtotal_covers_only_selected_lines() {
        // The full cart may be bigger; only the selection counts.
        assert_eq!(subtotal(&[line("1", 10_000, 1)]), Decimal::from(10_000));
        assert_eq!(subtotal(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_absent_price_or_quantity_counts_as_zero() {
        let mut no_price = line("1", 0, 4);
        no_price.price = Decimal::ZERO;
        let no_quantity = line("2", 9_000, 0);
        assert_eq!(subtotal(&[no_price, no_quantity]), Decimal::ZERO);
    }

    #[test]
    fn test_validate_requires_name_address_phone_but_not_email() {
        let mut ok = form(vec![]);
        ok.customer.email = String::new();
        assert!(ok.validate().is_ok());

        let mut blank_address = form(vec![]);
        blank_address.customer.address = String::new();
        match blank_address.validate().unwrap_err() {
            CheckoutError::MissingFields(fields) => assert_eq!(fields, vec!["address"]),
            CheckoutError::Api(_) => panic!("expected validation error"),
        }

        let mut all_blank = form(vec![]);
        all_blank.customer = OrderCustomer::default();
        match all_blank.validate().unwrap_err() {
            CheckoutError::MissingFields(fields) => {
                assert_eq!(fields, vec!["name", "address", "phone"]);
            }
            CheckoutError::Api(_) => panic!("expected validation error"),
        }
    }

    #[test]
    fn test_whitespace_only_fields_are_blank() {
        let mut form = form(vec![]);
        form.customer.phone = "   ".to_string();
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_build_order_snapshot() {
        let form = form(vec![line("1", 10_000, 1)]);
        let at = Utc.with_ymd_and_hms(2026, 8, 23, 10, 30, 0).unwrap();
        let order = form.build_order_at(at);

        assert_eq!(order.id, at.timestamp_millis().to_string());
        assert_eq!(order.date, "23/08/2026");
        assert_eq!(order.status, ORDER_PLACED_STATUS);
        assert_eq!(order.status_color, ORDER_PLACED_COLOR);
        assert_eq!(order.total, Decimal::from(25_000));
        assert_eq!(order.products, form.selected);
    }

    #[test]
    fn test_default_shipping_table() {
        let table = ShippingTable::default();
        assert_eq!(table.standard.fee, Decimal::from(15_000));
        assert_eq!(table.express.fee, Decimal::from(50_000));
        assert_ne!(table.standard.kind, table.express.kind);
    }
}
