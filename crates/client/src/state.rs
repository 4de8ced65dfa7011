//! Root application state container.

use crate::api::ShopApi;
use crate::config::ShopConfig;
use crate::store::{CartStore, CatalogStore, OrderStore, ProfileStore};

/// The application's state, one slice per backend collection.
///
/// Screens receive this container by reference at construction instead of
/// reaching for ambient globals. The slices are independent - no state is
/// shared for writing across them, so no cross-store locking exists.
pub struct AppState {
    /// Product catalog slice.
    pub catalog: CatalogStore,
    /// Cart slice.
    pub cart: CartStore,
    /// Session user profile slice.
    pub profile: ProfileStore,
    /// Order history slice (read-only).
    pub orders: OrderStore,
    /// User id the profile and order screens operate on.
    pub session_user: String,
    api: ShopApi,
}

impl AppState {
    /// Build the container and its shared API client from configuration.
    #[must_use]
    pub fn new(config: &ShopConfig) -> Self {
        Self::with_api(ShopApi::new(config), config.session_user.clone())
    }

    /// Build the container around an existing API client.
    #[must_use]
    pub fn with_api(api: ShopApi, session_user: String) -> Self {
        Self {
            catalog: CatalogStore::new(api.clone()),
            cart: CartStore::new(api.clone()),
            profile: ProfileStore::new(api.clone()),
            orders: OrderStore::new(api.clone()),
            session_user,
            api,
        }
    }

    /// The shared API client, for flows with no store of their own
    /// (checkout submission, registration).
    #[must_use]
    pub const fn api(&self) -> &ShopApi {
        &self.api
    }
}
