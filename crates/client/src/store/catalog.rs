//! Product catalog store.

use planta_core::{Product, ProductInput};
use tracing::instrument;

use crate::api::{ApiError, ShopApi};

/// Mirror of the `/products` collection with full CRUD.
pub struct CatalogStore {
    api: ShopApi,
    products: Vec<Product>,
    loading: bool,
}

impl CatalogStore {
    /// Create an empty store backed by the given API client.
    #[must_use]
    pub const fn new(api: ShopApi) -> Self {
        Self {
            api,
            products: Vec::new(),
            loading: false,
        }
    }

    /// The current local collection.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Whether a fetch is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Replace the local collection with the backend's.
    ///
    /// The loading flag is true for the duration of the call and false once
    /// it settles either way. On failure the existing collection is kept.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`ApiError`] on request failure.
    #[instrument(skip(self))]
    pub async fn refresh(&mut self) -> Result<(), ApiError> {
        self.loading = true;
        let result = self.api.list_products().await;
        self.loading = false;

        let products = result?;
        self.products = products;
        Ok(())
    }

    /// Post a draft and append the backend-assigned record.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`ApiError`]; the local collection is untouched
    /// on failure.
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn add(&mut self, input: ProductInput) -> Result<Product, ApiError> {
        let created = self.api.create_product(&input).await?;
        self.products.push(created.clone());
        Ok(created)
    }

    /// Put a full product record and replace the matching local one.
    ///
    /// If the id is not in the local collection the local state is left
    /// alone; the backend write still happened.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`ApiError`]; the local collection is untouched
    /// on failure.
    #[instrument(skip(self, product), fields(id = %product.id))]
    pub async fn update(&mut self, product: Product) -> Result<(), ApiError> {
        let saved = self.api.update_product(&product).await?;
        if let Some(slot) = self.products.iter_mut().find(|p| p.id == saved.id) {
            *slot = saved;
        }
        Ok(())
    }

    /// Delete by id and filter the id out of the local collection.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`ApiError`]; the local collection is untouched
    /// on failure.
    #[instrument(skip(self))]
    pub async fn remove(&mut self, id: &str) -> Result<(), ApiError> {
        self.api.delete_product(id).await?;
        self.products.retain(|p| p.id != id);
        Ok(())
    }
}
