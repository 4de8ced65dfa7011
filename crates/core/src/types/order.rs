//! Order records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::CartItem;

/// A placed order.
///
/// Orders are created once at checkout and immutable afterward. `products`
/// is a value snapshot of the selected cart lines: later changes to the
/// catalog or the cart never affect a historical order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Client-generated identifier (Unix timestamp in milliseconds).
    pub id: String,
    /// Submission date, formatted `dd/mm/yyyy`.
    pub date: String,
    /// Human-readable status label.
    pub status: String,
    /// Display color for the status label.
    pub status_color: String,
    /// Snapshot of the selected cart lines at submission time.
    pub products: Vec<CartItem>,
    /// Customer details entered at checkout.
    pub customer: OrderCustomer,
    /// Chosen shipping option.
    pub shipping_method: ShippingMethod,
    /// Payment method label; no gateway integration behind it.
    pub payment_method: String,
    /// Subtotal of the snapshot lines plus the shipping fee.
    pub total: Decimal,
}

/// Customer details captured on the checkout form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderCustomer {
    /// Recipient name. Required.
    pub name: String,
    /// Contact email. Optional at checkout.
    #[serde(default)]
    pub email: String,
    /// Delivery address. Required.
    pub address: String,
    /// Contact phone. Required.
    pub phone: String,
}

/// A shipping option: label, flat fee, and delivery estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingMethod {
    /// Option label (e.g., "standard", "express").
    #[serde(rename = "type")]
    pub kind: String,
    /// Flat shipping fee added to the order total.
    #[serde(default)]
    pub fee: Decimal,
    /// Human-readable delivery estimate (e.g., "5-7 days").
    pub estimate: String,
}
