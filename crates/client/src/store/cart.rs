//! Cart store.
//!
//! The cart holds at most one line per product id. Adding an already-carted
//! product merges quantities via a read-modify-write against the client's
//! copy of the line; two rapid adds of the same product can therefore race
//! to a stale base quantity and the last response wins. That is an accepted
//! weakness of this design, not a protocol to fix here.

use planta_core::CartItem;
use tracing::instrument;

use crate::api::{ApiError, ShopApi};

/// Direction for a single-step quantity change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityStep {
    /// Quantity + 1, unbounded.
    Increase,
    /// Quantity - 1, floored at 1. Removal is a separate explicit action.
    Decrease,
}

/// Mirror of the `/cart` collection.
pub struct CartStore {
    api: ShopApi,
    items: Vec<CartItem>,
    loading: bool,
}

impl CartStore {
    /// Create an empty store backed by the given API client.
    #[must_use]
    pub const fn new(api: ShopApi) -> Self {
        Self {
            api,
            items: Vec::new(),
            loading: false,
        }
    }

    /// The current local cart lines.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Whether a fetch is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Replace the local lines with the backend's.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`ApiError`]; on failure the existing lines
    /// are kept.
    #[instrument(skip(self))]
    pub async fn refresh(&mut self) -> Result<(), ApiError> {
        self.loading = true;
        let result = self.api.list_cart().await;
        self.loading = false;

        let items = result?;
        self.items = items;
        Ok(())
    }

    /// Add an item, merging by product id.
    ///
    /// If a line with `item.id` already exists, its quantity plus the
    /// incoming quantity is pushed to the backend line and merged locally.
    /// Otherwise a new backend line is created and appended.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`ApiError`]; the local lines are untouched
    /// on failure.
    #[instrument(skip(self, item), fields(id = %item.id, quantity = item.quantity))]
    pub async fn add(&mut self, item: CartItem) -> Result<(), ApiError> {
        if let Some(existing) = self.items.iter().find(|line| line.id == item.id) {
            let mut merged = existing.clone();
            merged.quantity = merged_quantity(existing.quantity, item.quantity);

            let saved = self.api.update_cart_line(&merged).await?;
            if let Some(line) = self.items.iter_mut().find(|line| line.id == saved.id) {
                *line = saved;
            }
        } else {
            let created = self.api.create_cart_line(&item).await?;
            self.items.push(created);
        }
        Ok(())
    }

    /// Step a line's quantity up or down.
    ///
    /// Decrease clamps at 1 and still writes the (unchanged) value through.
    /// An id with no local line is a no-op.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`ApiError`]; the local line is updated only
    /// on success.
    #[instrument(skip(self))]
    pub async fn set_quantity(&mut self, id: &str, step: QuantityStep) -> Result<(), ApiError> {
        let Some(existing) = self.items.iter().find(|line| line.id == id) else {
            return Ok(());
        };
        let mut updated = existing.clone();
        updated.quantity = stepped_quantity(existing.quantity, step);

        let saved = self.api.update_cart_line(&updated).await?;
        if let Some(line) = self.items.iter_mut().find(|line| line.id == id) {
            *line = saved;
        }
        Ok(())
    }

    /// Delete a line by id and filter it out locally.
    ///
    /// A backend 404 means the line is already gone; removing it again is a
    /// safe no-op, not an error for the caller.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`ApiError`] for failures other than not-found.
    #[instrument(skip(self))]
    pub async fn remove(&mut self, id: &str) -> Result<(), ApiError> {
        match self.api.delete_cart_line(id).await {
            Ok(()) | Err(ApiError::NotFound(_)) => {
                self.items.retain(|line| line.id != id);
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    /// Delete the whole cart collection and empty the local lines.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`ApiError`]; the local lines are untouched
    /// on failure.
    #[instrument(skip(self))]
    pub async fn clear(&mut self) -> Result<(), ApiError> {
        self.api.clear_cart().await?;
        self.items.clear();
        Ok(())
    }
}

/// Quantity for a merged line: existing plus incoming.
const fn merged_quantity(existing: i64, incoming: i64) -> i64 {
    existing + incoming
}

/// Quantity after one step, with the decrease floor at 1.
const fn stepped_quantity(current: i64, step: QuantityStep) -> i64 {
    match step {
        QuantityStep::Increase => current + 1,
        QuantityStep::Decrease => {
            if current <= 1 {
                1
            } else {
                current - 1
            }
        }
    }
}
