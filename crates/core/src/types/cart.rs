//! Cart line items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A line item in the cart.
///
/// The cart holds at most one line per product, so the line id *is* the
/// product id. `price` and `quantity` default to zero when the backend
/// record omits them; checkout treats the absent values as zero rather
/// than rejecting the line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Product id this line refers to.
    pub id: String,
    /// Product name snapshot.
    pub name: String,
    /// Unit price snapshot.
    #[serde(default)]
    pub price: Decimal,
    /// Image URL snapshot.
    #[serde(default)]
    pub image: String,
    /// Units of this product in the cart. Always >= 1 once the line exists;
    /// decrements clamp at 1, removal is a separate explicit action.
    #[serde(default)]
    pub quantity: i64,
}

impl CartItem {
    /// Line subtotal: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}
