//! Planta Client - state containers synchronized against the backend REST API.
//!
//! # Architecture
//!
//! - The backend is source of truth - every store operation issues an HTTP
//!   call first and patches the in-memory collection only on success
//! - Three independent store slices (catalog, cart, profile) plus a read-only
//!   order history store, composed into [`state::AppState`]
//! - Checkout is a pure derivation over explicitly selected cart lines; it
//!   posts one order record and never reads back through the stores
//!
//! # Concurrency
//!
//! Stores are single-owner: every operation takes `&mut self`, runs one
//! request to completion, and applies the response. Nothing is queued or
//! coalesced, and racing updates to the same line resolve last-write-wins.
//!
//! # Example
//!
//! ```rust,ignore
//! use planta_client::{config::ShopConfig, state::AppState};
//!
//! let config = ShopConfig::from_env()?;
//! let mut state = AppState::new(&config);
//!
//! state.catalog.refresh().await?;
//! state.cart.add(item).await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod checkout;
pub mod config;
pub mod state;
pub mod store;

pub use api::{ApiError, ShopApi};
pub use checkout::{CheckoutError, CheckoutForm, ShippingTable};
pub use config::{ConfigError, ShopConfig};
pub use state::AppState;
pub use store::{CartStore, CatalogStore, OrderStore, ProfileStore, QuantityStep};
