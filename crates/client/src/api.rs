//! REST client for the storefront backend.
//!
//! The backend exposes json-server style collection resources over JSON:
//! `/products`, `/cart`, `/users`, and `/orders`. One method per operation,
//! no retries, no request coalescing - callers own failure handling.
//!
//! Response bodies are read as text first and parsed separately, so a
//! malformed (non-JSON) body surfaces as [`ApiError::Parse`], distinct from
//! a transport failure or a non-success status.

use std::sync::Arc;

use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::instrument;

use planta_core::{CartItem, NewUser, Order, Product, ProductInput, UserProfile};

use crate::config::ShopConfig;

/// How much of an unexpected response body to keep in errors and logs.
const BODY_SNIPPET_LEN: usize = 200;

/// Errors that can occur when talking to the backend API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport failed (connection refused, timeout, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not valid JSON for the expected type.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Resource not found (HTTP 404).
    #[error("Not found: {0}")]
    NotFound(String),

    /// Backend returned a non-success status.
    #[error("HTTP {status}: {body}")]
    Status {
        /// Response status code.
        status: StatusCode,
        /// Truncated response body.
        body: String,
    },
}

/// Client for the storefront backend REST API.
///
/// Cheap to clone; all clones share one connection pool. Timeouts are the
/// `reqwest` defaults - there is deliberately no retry or backoff policy.
#[derive(Clone)]
pub struct ShopApi {
    inner: Arc<ShopApiInner>,
}

struct ShopApiInner {
    client: reqwest::Client,
    base_url: url::Url,
}

impl ShopApi {
    /// Create a new API client.
    #[must_use]
    pub fn new(config: &ShopConfig) -> Self {
        Self {
            inner: Arc::new(ShopApiInner {
                client: reqwest::Client::new(),
                base_url: config.base_url.clone(),
            }),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        let base = self.inner.base_url.as_str().trim_end_matches('/');
        format!("{base}/{path}")
    }

    /// Issue a request and decode the JSON response body.
    async fn execute<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let mut request = self.inner.client.request(method, self.endpoint(path));
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(path.to_string()));
        }

        // Read the body as text first for better error diagnostics
        let response_text = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                path = %path,
                body = %snippet(&response_text),
                "Backend returned non-success status"
            );
            return Err(ApiError::Status {
                status,
                body: snippet(&response_text),
            });
        }

        match serde_json::from_str(&response_text) {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    path = %path,
                    body = %snippet(&response_text),
                    "Failed to parse backend response"
                );
                Err(ApiError::Parse(e))
            }
        }
    }

    /// Issue a request where only the status matters.
    async fn execute_unit(&self, method: Method, path: &str) -> Result<(), ApiError> {
        let response = self
            .inner
            .client
            .request(method, self.endpoint(path))
            .send()
            .await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(path.to_string()));
        }
        if !status.is_success() {
            let response_text = response.text().await.unwrap_or_default();
            tracing::error!(
                status = %status,
                path = %path,
                body = %snippet(&response_text),
                "Backend returned non-success status"
            );
            return Err(ApiError::Status {
                status,
                body: snippet(&response_text),
            });
        }
        Ok(())
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// List the full product catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a product array.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        self.execute::<_, ()>(Method::GET, "products", None).await
    }

    /// Create a product; the backend assigns the id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create_product(&self, input: &ProductInput) -> Result<Product, ApiError> {
        self.execute(Method::POST, "products", Some(input)).await
    }

    /// Replace a product record by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the product does not exist.
    #[instrument(skip(self, product), fields(id = %product.id))]
    pub async fn update_product(&self, product: &Product) -> Result<Product, ApiError> {
        self.execute(
            Method::PUT,
            &format!("products/{}", product.id),
            Some(product),
        )
        .await
    }

    /// Delete a product by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the product does not exist.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: &str) -> Result<(), ApiError> {
        self.execute_unit(Method::DELETE, &format!("products/{id}"))
            .await
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// List the session's cart lines.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn list_cart(&self) -> Result<Vec<CartItem>, ApiError> {
        self.execute::<_, ()>(Method::GET, "cart", None).await
    }

    /// Create a new cart line.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, item), fields(id = %item.id, quantity = item.quantity))]
    pub async fn create_cart_line(&self, item: &CartItem) -> Result<CartItem, ApiError> {
        self.execute(Method::POST, "cart", Some(item)).await
    }

    /// Replace a cart line by id (quantity updates go through here).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the line does not exist.
    #[instrument(skip(self, item), fields(id = %item.id, quantity = item.quantity))]
    pub async fn update_cart_line(&self, item: &CartItem) -> Result<CartItem, ApiError> {
        self.execute(Method::PUT, &format!("cart/{}", item.id), Some(item))
            .await
    }

    /// Delete one cart line by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails; a missing line is reported as
    /// [`ApiError::NotFound`].
    #[instrument(skip(self))]
    pub async fn delete_cart_line(&self, id: &str) -> Result<(), ApiError> {
        self.execute_unit(Method::DELETE, &format!("cart/{id}")).await
    }

    /// Delete the entire cart collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn clear_cart(&self) -> Result<(), ApiError> {
        self.execute_unit(Method::DELETE, "cart").await
    }

    // =========================================================================
    // Users
    // =========================================================================

    /// Fetch one user profile by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the user does not exist.
    #[instrument(skip(self))]
    pub async fn get_user(&self, id: &str) -> Result<UserProfile, ApiError> {
        self.execute::<_, ()>(Method::GET, &format!("users/{id}"), None)
            .await
    }

    /// Replace a user profile by id; returns the server's copy.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the user does not exist.
    #[instrument(skip(self, profile), fields(id = %profile.id))]
    pub async fn update_user(&self, profile: &UserProfile) -> Result<UserProfile, ApiError> {
        self.execute(Method::PUT, &format!("users/{}", profile.id), Some(profile))
            .await
    }

    /// Register a new user account.
    ///
    /// The created record shape is backend-defined, so the raw JSON value is
    /// returned. A non-JSON body (seen in the wild from this backend) comes
    /// back as [`ApiError::Parse`], distinct from a transport failure.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is not JSON.
    #[instrument(skip(self, user), fields(email = %user.email))]
    pub async fn register_user(&self, user: &NewUser) -> Result<serde_json::Value, ApiError> {
        self.execute(Method::POST, "users", Some(user)).await
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// List all orders, in whatever order the backend returns them.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn list_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.execute::<_, ()>(Method::GET, "orders", None).await
    }

    /// Create an order record. Orders are never updated afterward.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, order), fields(id = %order.id, total = %order.total))]
    pub async fn create_order(&self, order: &Order) -> Result<Order, ApiError> {
        self.execute(Method::POST, "orders", Some(order)).await
    }
}

/// Truncate a response body for logs and error messages.
fn snippet(body: &str) -> String {
    body.chars().take(BODY_SNIPPET_LEN).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn test_api(base: &str) -> ShopApi {
        let config = ShopConfig::new(url::Url::parse(base).unwrap(), "1");
        ShopApi::new(&config)
    }

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let api = test_api("http://10.24.31.23:3000");
        assert_eq!(api.endpoint("products"), "http://10.24.31.23:3000/products");

        let api = test_api("http://10.24.31.23:3000/");
        assert_eq!(api.endpoint("cart/7"), "http://10.24.31.23:3000/cart/7");
    }

    #[test]
    fn test_api_error_display() {
        let err = ApiError::NotFound("cart/7".to_string());
        assert_eq!(err.to_string(), "Not found: cart/7");

        let err = ApiError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 500 Internal Server Error: boom");
    }

    #[test]
    fn test_snippet_truncates_long_bodies() {
        let body = "x".repeat(1000);
        assert_eq!(snippet(&body).len(), BODY_SNIPPET_LEN);
        assert_eq!(snippet("short"), "short");
    }

    #[test]
    fn test_parse_error_is_distinct_from_status_error() {
        // Registration anticipates non-JSON bodies; make sure the error
        // taxonomy keeps them apart.
        let parse_err: ApiError = serde_json::from_str::<serde_json::Value>("<html>")
            .unwrap_err()
            .into();
        assert!(matches!(parse_err, ApiError::Parse(_)));
    }
}
