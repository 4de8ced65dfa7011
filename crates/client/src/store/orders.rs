//! Order history store (read path only).

use planta_core::Order;
use tracing::instrument;

use crate::api::{ApiError, ShopApi};

/// Mirror of the `/orders` collection.
///
/// Orders are created by the checkout flow, not through this store; this is
/// strictly the history view. Records are kept in the order the backend
/// returned them - no client-side re-sort.
pub struct OrderStore {
    api: ShopApi,
    orders: Vec<Order>,
    loading: bool,
    error: Option<String>,
}

impl OrderStore {
    /// Create an empty store backed by the given API client.
    #[must_use]
    pub const fn new(api: ShopApi) -> Self {
        Self {
            api,
            orders: Vec::new(),
            loading: false,
            error: None,
        }
    }

    /// The current local order list, in backend arrival order.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Whether a fetch is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message from the last failed fetch, cleared when a new one starts.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Fetch all orders and replace the local list.
    ///
    /// Manual refresh re-issues this same fetch; there is no incremental or
    /// paginated loading.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`ApiError`]; the existing list is kept on
    /// failure and the error flag is set.
    #[instrument(skip(self))]
    pub async fn refresh(&mut self) -> Result<(), ApiError> {
        self.loading = true;
        self.error = None;

        let result = self.api.list_orders().await;
        self.loading = false;

        match result {
            Ok(orders) => {
                self.orders = orders;
                Ok(())
            }
            Err(err) => {
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }
}
