//! Integration tests for Planta.
//!
//! The backend is not mocked at the HTTP-client level: each test spawns an
//! in-process `axum` server that mimics the json-server collection semantics
//! the real backend exposes (`/products`, `/cart`, `/users`, `/orders`) and
//! points a real [`planta_client::AppState`] at it over loopback.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p planta-integration-tests
//! ```

#![allow(clippy::unwrap_used)]

use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    Json, Router,
    extract::{Path, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Value, json};
use url::Url;

use planta_client::{AppState, ShopConfig};

/// The mock backend's collections and bookkeeping.
#[derive(Default)]
struct Collections {
    products: Vec<Value>,
    cart: Vec<Value>,
    users: Vec<Value>,
    orders: Vec<Value>,
    next_id: u64,
    /// Total HTTP requests served, for zero-network-call assertions.
    hits: u64,
    /// When set, POST /users answers with a non-JSON body.
    users_return_html: bool,
    /// When set, every request answers 500 before reaching a handler.
    fail_requests: bool,
}

type Shared = Arc<Mutex<Collections>>;

/// A running in-process backend plus handles for seeding and inspection.
pub struct MockShop {
    shared: Shared,
    base_url: Url,
}

impl MockShop {
    /// Spawn the mock backend on an ephemeral loopback port.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot bind.
    pub async fn spawn() -> Self {
        let shared: Shared = Arc::default();
        let router = router(shared.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock backend");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("serve mock backend");
        });

        let base_url = Url::parse(&format!("http://{addr}")).expect("base url");
        Self { shared, base_url }
    }

    /// Client configuration pointing at this backend.
    #[must_use]
    pub fn config(&self) -> ShopConfig {
        ShopConfig::new(self.base_url.clone(), "1")
    }

    /// A fresh application state wired to this backend.
    #[must_use]
    pub fn app_state(&self) -> AppState {
        AppState::new(&self.config())
    }

    fn lock(&self) -> MutexGuard<'_, Collections> {
        self.shared.lock().expect("mock state lock")
    }

    /// Seed a product record.
    pub fn seed_product(&self, product: Value) {
        self.lock().products.push(product);
    }

    /// Seed a cart line.
    pub fn seed_cart_line(&self, line: Value) {
        self.lock().cart.push(line);
    }

    /// Seed a user record.
    pub fn seed_user(&self, user: Value) {
        self.lock().users.push(user);
    }

    /// Snapshot of the products collection.
    #[must_use]
    pub fn products(&self) -> Vec<Value> {
        self.lock().products.clone()
    }

    /// Snapshot of the cart collection.
    #[must_use]
    pub fn cart(&self) -> Vec<Value> {
        self.lock().cart.clone()
    }

    /// Snapshot of the users collection.
    #[must_use]
    pub fn users(&self) -> Vec<Value> {
        self.lock().users.clone()
    }

    /// Snapshot of the orders collection.
    #[must_use]
    pub fn orders(&self) -> Vec<Value> {
        self.lock().orders.clone()
    }

    /// Total HTTP requests this backend has served.
    #[must_use]
    pub fn request_count(&self) -> u64 {
        self.lock().hits
    }

    /// Make POST /users answer with a non-JSON body, as the real backend
    /// has been seen doing when misconfigured.
    pub fn break_registration_body(&self) {
        self.lock().users_return_html = true;
    }

    /// Toggle whether every request fails with a 500 before any handler runs.
    pub fn fail_requests(&self, fail: bool) {
        self.lock().fail_requests = fail;
    }
}

fn router(shared: Shared) -> Router {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/{id}",
            axum::routing::put(update_product).delete(delete_product),
        )
        .route("/cart", get(list_cart).post(create_cart_line).delete(clear_cart))
        .route(
            "/cart/{id}",
            axum::routing::put(update_cart_line).delete(delete_cart_line),
        )
        .route("/users", post(create_user))
        .route("/users/{id}", get(get_user).put(update_user))
        .route("/orders", get(list_orders).post(create_order))
        .layer(middleware::from_fn_with_state(shared.clone(), count_hits))
        .with_state(shared)
}

async fn count_hits(State(state): State<Shared>, request: Request, next: Next) -> Response {
    let failing = {
        let mut collections = state.lock().expect("mock state lock");
        collections.hits += 1;
        collections.fail_requests
    };
    if failing {
        return (StatusCode::INTERNAL_SERVER_ERROR, "mock backend failure").into_response();
    }
    next.run(request).await
}

fn guard(state: &Shared) -> MutexGuard<'_, Collections> {
    state.lock().expect("mock state lock")
}

// =============================================================================
// /products
// =============================================================================

async fn list_products(State(state): State<Shared>) -> Json<Value> {
    Json(Value::Array(guard(&state).products.clone()))
}

async fn create_product(State(state): State<Shared>, Json(mut body): Json<Value>) -> Json<Value> {
    let mut collections = guard(&state);
    collections.next_id += 1;
    body["id"] = json!(collections.next_id.to_string());
    collections.products.push(body.clone());
    Json(body)
}

async fn update_product(
    Path(id): Path<String>,
    State(state): State<Shared>,
    Json(mut body): Json<Value>,
) -> Response {
    let mut collections = guard(&state);
    body["id"] = json!(id);
    match collections.products.iter_mut().find(|p| p["id"] == json!(id)) {
        Some(slot) => {
            *slot = body.clone();
            Json(body).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn delete_product(Path(id): Path<String>, State(state): State<Shared>) -> Response {
    let mut collections = guard(&state);
    let before = collections.products.len();
    collections.products.retain(|p| p["id"] != json!(id));
    if collections.products.len() == before {
        StatusCode::NOT_FOUND.into_response()
    } else {
        Json(json!({})).into_response()
    }
}

// =============================================================================
// /cart
// =============================================================================

async fn list_cart(State(state): State<Shared>) -> Json<Value> {
    Json(Value::Array(guard(&state).cart.clone()))
}

async fn create_cart_line(State(state): State<Shared>, Json(mut body): Json<Value>) -> Json<Value> {
    let mut collections = guard(&state);
    // Cart lines carry the product id; only assign one if the client didn't.
    if body.get("id").is_none() {
        collections.next_id += 1;
        body["id"] = json!(collections.next_id.to_string());
    }
    collections.cart.push(body.clone());
    Json(body)
}

async fn update_cart_line(
    Path(id): Path<String>,
    State(state): State<Shared>,
    Json(mut body): Json<Value>,
) -> Response {
    let mut collections = guard(&state);
    body["id"] = json!(id);
    match collections.cart.iter_mut().find(|l| l["id"] == json!(id)) {
        Some(slot) => {
            *slot = body.clone();
            Json(body).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn delete_cart_line(Path(id): Path<String>, State(state): State<Shared>) -> Response {
    let mut collections = guard(&state);
    let before = collections.cart.len();
    collections.cart.retain(|l| l["id"] != json!(id));
    if collections.cart.len() == before {
        StatusCode::NOT_FOUND.into_response()
    } else {
        Json(json!({})).into_response()
    }
}

async fn clear_cart(State(state): State<Shared>) -> Json<Value> {
    guard(&state).cart.clear();
    Json(json!({}))
}

// =============================================================================
// /users
// =============================================================================

async fn get_user(Path(id): Path<String>, State(state): State<Shared>) -> Response {
    guard(&state)
        .users
        .iter()
        .find(|u| u["id"] == json!(id))
        .map_or_else(
            || StatusCode::NOT_FOUND.into_response(),
            |user| Json(user.clone()).into_response(),
        )
}

async fn update_user(
    Path(id): Path<String>,
    State(state): State<Shared>,
    Json(mut body): Json<Value>,
) -> Response {
    let mut collections = guard(&state);
    body["id"] = json!(id);
    match collections.users.iter_mut().find(|u| u["id"] == json!(id)) {
        Some(slot) => {
            *slot = body.clone();
            Json(body).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn create_user(State(state): State<Shared>, Json(mut body): Json<Value>) -> Response {
    let mut collections = guard(&state);
    if collections.users_return_html {
        return (
            StatusCode::OK,
            [("content-type", "text/html")],
            "<html>registered</html>",
        )
            .into_response();
    }
    collections.next_id += 1;
    body["id"] = json!(collections.next_id.to_string());
    collections.users.push(body.clone());
    Json(body).into_response()
}

// =============================================================================
// /orders
// =============================================================================

async fn list_orders(State(state): State<Shared>) -> Json<Value> {
    Json(Value::Array(guard(&state).orders.clone()))
}

async fn create_order(State(state): State<Shared>, Json(body): Json<Value>) -> Json<Value> {
    // Orders arrive with a client-generated id; store them as-is, in
    // arrival order.
    guard(&state).orders.push(body.clone());
    Json(body)
}
