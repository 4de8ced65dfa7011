//! End-to-end tests for the order history store.

use planta_client::{CheckoutForm, ShippingTable};
use planta_core::{CartItem, OrderCustomer};
use planta_integration_tests::MockShop;
use rust_decimal::Decimal;

fn form(ids: &[&str]) -> CheckoutForm {
    CheckoutForm {
        selected: ids
            .iter()
            .map(|id| CartItem {
                id: (*id).to_string(),
                name: format!("plant-{id}"),
                price: Decimal::from(10_000),
                image: String::new(),
                quantity: 1,
            })
            .collect(),
        customer: OrderCustomer {
            name: "Lan".to_string(),
            email: String::new(),
            address: "12 Hang Gai".to_string(),
            phone: "0900000000".to_string(),
        },
        shipping: ShippingTable::default().standard,
        payment_method: "cod".to_string(),
    }
}

#[tokio::test]
async fn test_history_preserves_backend_arrival_order() {
    let shop = MockShop::spawn().await;
    let mut state = shop.app_state();

    let first = form(&["1"]).submit(state.api()).await.expect("first");
    let second = form(&["2"]).submit(state.api()).await.expect("second");

    state.orders.refresh().await.expect("refresh");

    // No client-side re-sort: the list reads back as the backend served it.
    let orders = state.orders.orders();
    assert_eq!(orders.len(), 2);
    assert_eq!(orders.first().expect("order").id, first.id);
    assert_eq!(orders.get(1).expect("order").id, second.id);
}

#[tokio::test]
async fn test_refresh_replaces_the_local_list() {
    let shop = MockShop::spawn().await;
    let mut state = shop.app_state();

    form(&["1"]).submit(state.api()).await.expect("first");
    state.orders.refresh().await.expect("refresh");
    assert_eq!(state.orders.orders().len(), 1);

    form(&["2"]).submit(state.api()).await.expect("second");
    state.orders.refresh().await.expect("refresh");
    assert_eq!(state.orders.orders().len(), 2);
}

#[tokio::test]
async fn test_failed_refresh_keeps_the_previous_list() {
    let shop = MockShop::spawn().await;
    let mut state = shop.app_state();

    form(&["1"]).submit(state.api()).await.expect("submit");
    state.orders.refresh().await.expect("refresh");

    shop.fail_requests(true);
    assert!(state.orders.refresh().await.is_err());

    assert!(!state.orders.is_loading());
    assert!(state.orders.last_error().is_some());
    assert_eq!(state.orders.orders().len(), 1);
}
