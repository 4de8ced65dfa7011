//! Catalog product records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A sellable item in the product catalog.
///
/// The `id` is assigned by the backend on creation. Products are only ever
/// mutated through the catalog store; cart and order flows read them but
/// never write back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Backend-assigned identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Unit price.
    #[serde(default)]
    pub price: Decimal,
    /// Pot/plant size label (e.g., "M", "30cm").
    #[serde(default)]
    pub size: String,
    /// Country or region of origin.
    #[serde(default)]
    pub origin: String,
    /// Stock label as the backend stores it (free-form).
    #[serde(default)]
    pub stock: String,
    /// Image URL.
    #[serde(default)]
    pub image: String,
}

/// A product draft posted to the catalog; the backend assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInput {
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Decimal,
    /// Pot/plant size label.
    pub size: String,
    /// Country or region of origin.
    pub origin: String,
    /// Stock label.
    pub stock: String,
    /// Image URL.
    pub image: String,
}
