//! Command implementations, one module per screen-equivalent.

pub mod account;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod orders;

use thiserror::Error;

/// Errors specific to CLI command handling.
#[derive(Debug, Error)]
pub enum CommandError {
    /// A referenced product id does not exist in the catalog.
    #[error("No product with id {0} in the catalog")]
    UnknownProduct(String),

    /// None of the requested ids matched a cart line.
    #[error("No cart lines matched the selected ids")]
    EmptySelection,

    /// User input failed validation before any network call.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
