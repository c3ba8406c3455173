//! API Integration Tests
//!
//! These tests require a running PostgreSQL instance reachable through
//! `DATABASE_URL`. They are skipped when it is not set.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;

/// Register a fresh account and return its token
async fn signed_in(server: &TestServer, is_admin: bool) -> (RegisterRequest, String) {
    let register = RegisterRequest::unique(is_admin);
    let response = server.post("/register", None, &register).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post("/login", None, &LoginRequest::from_register(&register))
        .await
        .unwrap();
    let token: TokenResponse = assert_json(response, StatusCode::OK).await.unwrap();
    (register, token.token)
}

async fn create_item(server: &TestServer, admin: &str, price: f64, stock: i32) -> ItemResponse {
    let response = server
        .post("/items", Some(admin), &ItemRequest::unique(price, stock))
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn list_item(server: &TestServer, id: &str) -> Option<ItemResponse> {
    let response = server.get("/items", None).await.unwrap();
    let items: Vec<ItemResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    items.into_iter().find(|item| item.id == id)
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get_raw("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get_raw("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_and_login() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique(false);

    let response = server.post("/register", None, &request).await.unwrap();
    let registered: RegisterResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(registered.message, "User created successfully");
    assert_eq!(registered.user.username, request.username);
    assert_eq!(registered.user.role, "client");

    let response = server
        .post("/login", None, &LoginRequest::from_register(&request))
        .await
        .unwrap();
    let token: TokenResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(token.token_type, "Bearer");
    assert_eq!(token.expires_in, 3600);
    assert!(!token.token.is_empty());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique(false);
    server.post("/register", None, &request).await.unwrap();

    let response = server.post("/register", None, &request).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(error.message, "Email already in use");
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register, _) = signed_in(&server, false).await;

    let unknown = LoginRequest {
        email: format!("nobody{}@example.com", unique_suffix()),
        password: "whatever".to_string(),
    };
    let wrong = LoginRequest {
        email: register.email.clone(),
        password: "not-the-password".to_string(),
    };

    let response = server.post("/login", None, &unknown).await.unwrap();
    let unknown: ErrorResponse = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    let response = server.post("/login", None, &wrong).await.unwrap();
    let wrong: ErrorResponse = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();

    assert_eq!(unknown.code, wrong.code);
    assert_eq!(unknown.message, wrong.message);
}

// ============================================================================
// Item Tests
// ============================================================================

#[tokio::test]
async fn test_item_lifecycle() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, admin) = signed_in(&server, true).await;

    let item = create_item(&server, &admin, 12.5, 4).await;
    assert_eq!(item.price, 12.5);
    assert!(list_item(&server, &item.id).await.is_some());

    let update = ItemRequest {
        name: format!("{} v2", item.name),
        price: 15.0,
        stock: 9,
    };
    let response = server
        .put(&format!("/items/{}", item.id), Some(&admin), &update)
        .await
        .unwrap();
    let updated: ItemResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.id, item.id);
    assert_eq!(updated.name, update.name);
    assert_eq!(updated.stock, 9);

    let response = server
        .delete(&format!("/items/{}", item.id), Some(&admin))
        .await
        .unwrap();
    let deleted: MessageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(deleted.message, "Item deleted successfully");
    assert!(list_item(&server, &item.id).await.is_none());

    let response = server
        .delete(&format!("/items/{}", item.id), Some(&admin))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_item_writes_require_admin() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, client) = signed_in(&server, false).await;
    let request = ItemRequest::unique(1.0, 1);

    let response = server.post("/items", None, &request).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server.post("/items", Some(&client), &request).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(error.detail, Some(serde_json::json!("Forbidden Access")));
}

// ============================================================================
// Order Tests
// ============================================================================

#[tokio::test]
async fn test_order_decrements_stock_and_appears_in_profile() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, admin) = signed_in(&server, true).await;
    let (register, client) = signed_in(&server, false).await;
    let item = create_item(&server, &admin, 10.0, 5).await;

    let response = server
        .post("/orders", Some(&client), &OrderRequest::single(&item.id, 3, 30.0))
        .await
        .unwrap();
    let created: OrderCreatedResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.message, "Order created successfully");
    assert_eq!(created.order.total_price, 30.0);
    assert!(created.order.is_success_paid);
    assert_eq!(created.order.lines[0].item.id, item.id);

    let remaining = list_item(&server, &item.id).await.unwrap();
    assert_eq!(remaining.stock, 2);

    let response = server.get("/myprofiles", Some(&client)).await.unwrap();
    let profile: ProfileResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(profile.username, register.username);
    assert_eq!(profile.orders.len(), 1);
    assert_eq!(profile.orders[0].id, created.order.id);
    assert_eq!(profile.orders[0].lines[0].quantity, 3);
    assert_eq!(profile.orders[0].lines[0].unit_price, 10.0);
}

#[tokio::test]
async fn test_rejected_orders_leave_stock_untouched() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, admin) = signed_in(&server, true).await;
    let (_, client) = signed_in(&server, false).await;
    let item = create_item(&server, &admin, 10.0, 5).await;

    // Underpaid
    let response = server
        .post("/orders", Some(&client), &OrderRequest::single(&item.id, 3, 10.0))
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.message, "Paid amount does not match total price");

    // More than on hand
    let response = server
        .post("/orders", Some(&client), &OrderRequest::single(&item.id, 6, 60.0))
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert!(error.message.starts_with("Insufficient stock"));

    assert_eq!(list_item(&server, &item.id).await.unwrap().stock, 5);

    let response = server.get("/myprofiles", Some(&client)).await.unwrap();
    let profile: ProfileResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(profile.orders.is_empty());
}

#[tokio::test]
async fn test_order_for_unknown_item() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, client) = signed_in(&server, false).await;
    let missing = uuid::Uuid::new_v4().to_string();

    let response = server
        .post("/transactions", Some(&client), &OrderRequest::single(&missing, 1, 1.0))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_admin_cannot_place_orders() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, admin) = signed_in(&server, true).await;
    let item = create_item(&server, &admin, 1.0, 1).await;

    let response = server
        .post("/orders", Some(&admin), &OrderRequest::single(&item.id, 1, 1.0))
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}
