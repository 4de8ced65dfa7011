//! End-to-end tests for the checkout flow.

use planta_client::{CheckoutError, CheckoutForm, ShippingTable};
use planta_core::{CartItem, OrderCustomer};
use planta_integration_tests::MockShop;
use rust_decimal::Decimal;
use serde_json::json;

fn line(id: &str, price: i64, quantity: i64) -> CartItem {
    CartItem {
        id: id.to_string(),
        name: format!("plant-{id}"),
        price: Decimal::from(price),
        image: String::new(),
        quantity,
    }
}

fn customer() -> OrderCustomer {
    OrderCustomer {
        name: "Lan".to_string(),
        email: "lan@example.com".to_string(),
        address: "12 Hang Gai".to_string(),
        phone: "0900000000".to_string(),
    }
}

#[tokio::test]
async fn test_submit_posts_exactly_one_order() {
    let shop = MockShop::spawn().await;
    let state = shop.app_state();

    let form = CheckoutForm {
        selected: vec![line("1", 10_000, 2), line("2", 5_000, 1)],
        customer: customer(),
        shipping: ShippingTable::default().standard,
        payment_method: "visa".to_string(),
    };

    let order = form.submit(state.api()).await.expect("submit");

    // 10000*2 + 5000*1 + 15000 shipping
    assert_eq!(order.total, Decimal::from(40_000));
    assert_eq!(order.status, planta_client::checkout::ORDER_PLACED_STATUS);

    let backend = shop.orders();
    assert_eq!(backend.len(), 1);
    let record = backend.first().expect("order");
    assert_eq!(record["id"], json!(order.id));
    assert_eq!(record["statusColor"], json!("green"));
    assert_eq!(record["shippingMethod"]["type"], json!("standard"));
    assert_eq!(record["products"].as_array().expect("lines").len(), 2);
}

#[tokio::test]
async fn test_validation_failure_makes_no_network_call() {
    let shop = MockShop::spawn().await;
    let state = shop.app_state();

    let mut bad = customer();
    bad.address = "   ".to_string();
    let form = CheckoutForm {
        selected: vec![line("1", 10_000, 1)],
        customer: bad,
        shipping: ShippingTable::default().standard,
        payment_method: "visa".to_string(),
    };

    let err = form.submit(state.api()).await.expect_err("blank address");
    match err {
        CheckoutError::MissingFields(fields) => assert_eq!(fields, vec!["address"]),
        CheckoutError::Api(_) => panic!("expected validation error"),
    }

    assert_eq!(shop.request_count(), 0);
    assert!(shop.orders().is_empty());
}

#[tokio::test]
async fn test_order_snapshot_survives_later_price_changes() {
    let shop = MockShop::spawn().await;
    shop.seed_product(json!({
        "id": "1", "name": "Monstera", "price": 10_000,
        "size": "M", "origin": "Vietnam", "stock": "5", "image": ""
    }));
    let mut state = shop.app_state();

    let form = CheckoutForm {
        selected: vec![line("1", 10_000, 1)],
        customer: customer(),
        shipping: ShippingTable::default().standard,
        payment_method: "visa".to_string(),
    };
    form.submit(state.api()).await.expect("submit");

    // The catalog price moves after the order was placed.
    state.catalog.refresh().await.expect("refresh");
    let mut edited = state.catalog.products().first().expect("product").clone();
    edited.price = Decimal::from(99_000);
    state.catalog.update(edited).await.expect("update");

    // Re-fetched history still shows the price at submission time.
    state.orders.refresh().await.expect("refresh");
    let order = state.orders.orders().first().expect("order");
    let snapshot = order.products.first().expect("line");
    assert_eq!(snapshot.price, Decimal::from(10_000));
}

#[tokio::test]
async fn test_failed_submit_leaves_history_empty() {
    let shop = MockShop::spawn().await;
    let state = shop.app_state();

    let form = CheckoutForm {
        selected: vec![line("1", 10_000, 1)],
        customer: customer(),
        shipping: ShippingTable::default().express,
        payment_method: "visa".to_string(),
    };

    shop.fail_requests(true);
    let err = form.submit(state.api()).await.expect_err("backend down");
    assert!(matches!(err, CheckoutError::Api(_)));

    shop.fail_requests(false);
    assert!(shop.orders().is_empty());
}
