//! End-to-end tests for the profile store and registration.

use planta_client::ApiError;
use planta_core::NewUser;
use planta_integration_tests::MockShop;
use serde_json::json;

fn seeded(shop: &MockShop) {
    shop.seed_user(json!({
        "id": "1",
        "name": "Lan",
        "email": "lan@example.com",
        "phone": "0900000000",
        "address": "12 Hang Gai",
        "avatar": ""
    }));
}

#[tokio::test]
async fn test_fetch_loads_the_session_user() {
    let shop = MockShop::spawn().await;
    seeded(&shop);
    let mut state = shop.app_state();

    let user_id = state.session_user.clone();
    state.profile.fetch(&user_id).await.expect("fetch");

    let profile = state.profile.profile().expect("profile");
    assert_eq!(profile.name, "Lan");
    assert_eq!(profile.address.as_deref(), Some("12 Hang Gai"));
    assert!(!state.profile.is_loading());
    assert!(state.profile.last_error().is_none());
}

#[tokio::test]
async fn test_save_adopts_the_server_copy() {
    let shop = MockShop::spawn().await;
    seeded(&shop);
    let mut state = shop.app_state();
    state.profile.fetch("1").await.expect("fetch");

    let mut edited = state.profile.profile().expect("profile").clone();
    edited.phone = "0911111111".to_string();
    state.profile.save(edited).await.expect("save");

    assert_eq!(state.profile.profile().expect("profile").phone, "0911111111");
    let backend = shop.users();
    assert_eq!(backend.first().expect("user")["phone"], json!("0911111111"));
}

#[tokio::test]
async fn test_fetch_of_missing_user_sets_the_error_flag() {
    let shop = MockShop::spawn().await;
    seeded(&shop);
    let mut state = shop.app_state();
    state.profile.fetch("1").await.expect("fetch");

    let err = state.profile.fetch("999").await.expect_err("missing user");
    assert!(matches!(err, ApiError::NotFound(_)));

    // The flag carries the failure; the last good profile stays.
    assert!(state.profile.last_error().is_some());
    assert_eq!(state.profile.profile().expect("profile").id, "1");
    assert!(!state.profile.is_loading());
}

#[tokio::test]
async fn test_error_flag_clears_on_the_next_call() {
    let shop = MockShop::spawn().await;
    seeded(&shop);
    let mut state = shop.app_state();

    state.profile.fetch("999").await.expect_err("missing user");
    assert!(state.profile.last_error().is_some());

    state.profile.fetch("1").await.expect("fetch");
    assert!(state.profile.last_error().is_none());
}

#[tokio::test]
async fn test_registration_creates_a_user_record() {
    let shop = MockShop::spawn().await;
    let state = shop.app_state();

    state
        .api()
        .register_user(&NewUser {
            name: "Mai".to_string(),
            email: "mai@example.com".to_string(),
            password: "hunter2".to_string(),
            phone: "0922222222".to_string(),
        })
        .await
        .expect("register");

    let backend = shop.users();
    assert_eq!(backend.len(), 1);
    assert_eq!(backend.first().expect("user")["email"], json!("mai@example.com"));
}

#[tokio::test]
async fn test_registration_non_json_body_is_a_parse_error() {
    let shop = MockShop::spawn().await;
    shop.break_registration_body();
    let state = shop.app_state();

    let err = state
        .api()
        .register_user(&NewUser {
            name: "Mai".to_string(),
            email: "mai@example.com".to_string(),
            password: "hunter2".to_string(),
            phone: "0922222222".to_string(),
        })
        .await
        .expect_err("html body");

    // A 200 with a non-JSON body is a parse failure, not an HTTP failure.
    assert!(matches!(err, ApiError::Parse(_)));
}
