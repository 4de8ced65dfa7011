//! In-memory stores, one per backend collection.
//!
//! Each store owns its slice of state exclusively: an operation issues the
//! matching HTTP call, and only a successful response patches the local
//! collection. Failures leave the collection at its last known-good value
//! and surface the error to the calling screen - never a silent retry.

pub mod cart;
pub mod catalog;
pub mod orders;
pub mod profile;

pub use cart::{CartStore, QuantityStep};
pub use catalog::CatalogStore;
pub use orders::OrderStore;
pub use profile::ProfileStore;
