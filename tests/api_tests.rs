//! Integration tests for the HTTP surface.
//!
//! Each test gets its own in-memory store and drives the router directly.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

use shopkeep::api::AppState;
use shopkeep::config::Config;
use shopkeep::models::{CartItemFields, NewLoginLog, NewProduct, NewUser};

const ADMIN: &str = "admin@gmail.com";

async fn spawn_app() -> (Router, Arc<AppState>) {
    let mut config = Config::default();
    config.general.database_path = "sqlite::memory:".to_string();

    let state = shopkeep::api::create_app_state_from_config(config, None)
        .await
        .expect("Failed to create app state");

    (shopkeep::api::router(state.clone()), state)
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    identity: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(identity) = identity {
        builder = builder.header("x-user-email", identity);
    }

    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}

async fn seed_user(state: &AppState, email: &str) {
    state
        .store()
        .create_user(&NewUser::new("Test User", email))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_admin_routes_reject_missing_and_foreign_identities() {
    let (app, _) = spawn_app().await;

    let routes = [
        ("GET", "/api/admin/users"),
        ("DELETE", "/api/admin/user/some-id"),
        ("GET", "/api/admin/carts"),
        ("POST", "/api/admin/cart"),
        ("PUT", "/api/admin/cart/some-id"),
        ("DELETE", "/api/admin/cart/some-id"),
        ("GET", "/api/admin/logs"),
        ("GET", "/api/admin/metrics"),
    ];

    for (method, uri) in routes {
        for identity in [None, Some("user@gmail.com"), Some("Admin@gmail.com")] {
            let (status, body) = send(&app, method, uri, identity, None).await;
            assert_eq!(status, StatusCode::FORBIDDEN, "{method} {uri} as {identity:?}");
            assert_eq!(body["message"], "Forbidden - Admins only");
        }
    }
}

#[tokio::test]
async fn test_gate_runs_before_body_validation() {
    let (app, state) = spawn_app().await;
    seed_user(&state, "a@x.com").await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/admin/cart",
        Some("user@gmail.com"),
        Some(json!({"userEmail": "a@x.com", "name": "Mug", "price": 5, "quantity": 1})),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(state.store().list_cart_items().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_cart_lifecycle() {
    let (app, state) = spawn_app().await;
    seed_user(&state, "a@x.com").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/admin/cart",
        Some(ADMIN),
        Some(json!({"userEmail": "a@x.com", "name": "Mug", "price": "9.99", "quantity": "2"})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Cart item created successfully");
    assert_eq!(body["item"]["price"], json!(9.99));
    assert_eq!(body["item"]["quantity"], json!(2));
    assert_eq!(body["item"]["userEmail"], "a@x.com");
    assert_eq!(body["item"]["image"], "");

    let id = body["item"]["id"].as_str().unwrap().to_string();
    let created_at = body["item"]["createdAt"].clone();

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/admin/cart/{id}"),
        Some(ADMIN),
        Some(json!({"userEmail": "a@x.com", "name": "Mug", "price": "12.50", "quantity": "1"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Cart item updated successfully");
    assert_eq!(body["item"]["id"], id.as_str());
    assert_eq!(body["item"]["price"], json!(12.5));
    assert_eq!(body["item"]["quantity"], json!(1));
    assert_eq!(body["item"]["createdAt"], created_at);

    let (status, body) = send(&app, "GET", "/api/admin/carts", Some(ADMIN), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"].as_array().unwrap().len(), 1);

    let (status, body) = send(
        &app,
        "DELETE",
        &format!("/api/admin/cart/{id}"),
        Some(ADMIN),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Cart item deleted");

    let (_, body) = send(&app, "GET", "/api/admin/carts", Some(ADMIN), None).await;
    assert!(body["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_cart_rejects_invalid_fields_without_writing() {
    let (app, state) = spawn_app().await;
    seed_user(&state, "a@x.com").await;

    let cases = [
        (
            json!({"name": "Mug", "price": 5, "quantity": 1}),
            "User email, name, price, and quantity are required",
        ),
        (
            json!({"userEmail": "a@x.com", "name": "Mug", "price": 0, "quantity": 1}),
            "User email, name, price, and quantity are required",
        ),
        (
            json!({"userEmail": "a@x.com", "name": "Mug", "price": -5, "quantity": 1}),
            "Price must be a positive number",
        ),
        (
            json!({"userEmail": "a@x.com", "name": "Mug", "price": "abc", "quantity": 1}),
            "Price must be a positive number",
        ),
        (
            json!({"userEmail": "a@x.com", "name": "Mug", "price": 5, "quantity": "0"}),
            "Quantity must be a positive integer",
        ),
        (
            json!({"userEmail": "a@x.com", "name": "Mug", "price": 5, "quantity": 2.5}),
            "Quantity must be a positive integer",
        ),
    ];

    for (body, message) in cases {
        let (status, response) =
            send(&app, "POST", "/api/admin/cart", Some(ADMIN), Some(body.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(response["message"], message, "{body}");
    }

    assert!(state.store().list_cart_items().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_malformed_bodies_are_bad_requests() {
    let (app, state) = spawn_app().await;
    seed_user(&state, "a@x.com").await;

    let bodies = [
        json!({"userEmail": "a@x.com", "name": "Mug", "price": 5, "quantity": 1, "role": "admin"}),
        json!({"userEmail": "a@x.com", "name": "Mug", "price": 5, "quantity": true}),
        json!({"userEmail": 7, "name": "Mug", "price": 5, "quantity": 1}),
    ];

    for body in bodies {
        let (status, response) =
            send(&app, "POST", "/api/admin/cart", Some(ADMIN), Some(body.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
        assert!(response["message"].is_string(), "{body}");
    }

    let request = Request::builder()
        .method("POST")
        .uri("/api/admin/cart")
        .header("x-user-email", ADMIN)
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert!(state.store().list_cart_items().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_cart_for_unknown_user() {
    let (app, state) = spawn_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/admin/cart",
        Some(ADMIN),
        Some(json!({"userEmail": "ghost@x.com", "name": "Mug", "price": 5, "quantity": 1})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User not found with the provided email");
    assert!(state.store().list_cart_items().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_missing_cart_item() {
    let (app, state) = spawn_app().await;
    seed_user(&state, "a@x.com").await;

    for email in ["a@x.com", "ghost@x.com"] {
        let (status, body) = send(
            &app,
            "PUT",
            "/api/admin/cart/does-not-exist",
            Some(ADMIN),
            Some(json!({"userEmail": email, "name": "Mug", "price": 5, "quantity": 1})),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Cart item not found");
    }

    // Field validation comes first
    let (status, _) = send(
        &app,
        "PUT",
        "/api/admin/cart/does-not-exist",
        Some(ADMIN),
        Some(json!({"userEmail": "a@x.com", "name": "Mug", "price": -1, "quantity": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_requires_every_field() {
    let (app, state) = spawn_app().await;
    seed_user(&state, "a@x.com").await;

    let (_, body) = send(
        &app,
        "POST",
        "/api/admin/cart",
        Some(ADMIN),
        Some(json!({"userEmail": "a@x.com", "name": "Mug", "price": 5, "quantity": 1})),
    )
    .await;
    let id = body["item"]["id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/admin/cart/{id}"),
        Some(ADMIN),
        Some(json!({"price": 7})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "User email, name, price, and quantity are required");

    let item = state.store().get_cart_item(&id).await.unwrap().unwrap();
    assert!((item.price - 5.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_deletes_of_unknown_ids_succeed() {
    let (app, state) = spawn_app().await;
    seed_user(&state, "a@x.com").await;

    let (status, body) = send(&app, "DELETE", "/api/admin/user/nope", Some(ADMIN), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User deleted");

    let (status, body) = send(&app, "DELETE", "/api/admin/cart/nope", Some(ADMIN), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Cart item deleted");

    assert_eq!(state.store().list_users().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_user_leaves_cart_items() {
    let (app, state) = spawn_app().await;
    seed_user(&state, "a@x.com").await;

    send(
        &app,
        "POST",
        "/api/admin/cart",
        Some(ADMIN),
        Some(json!({"userEmail": "a@x.com", "name": "Mug", "price": 5, "quantity": 1})),
    )
    .await;

    let user = state
        .store()
        .get_user_by_email("a@x.com")
        .await
        .unwrap()
        .unwrap();

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/api/admin/user/{}", user.id),
        Some(ADMIN),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, "GET", "/api/admin/users", Some(ADMIN), None).await;
    assert!(body["users"].as_array().unwrap().is_empty());

    let (_, body) = send(&app, "GET", "/api/admin/carts", Some(ADMIN), None).await;
    assert_eq!(body["items"][0]["userEmail"], "a@x.com");
}

#[tokio::test]
async fn test_lists_are_newest_first() {
    let (app, state) = spawn_app().await;
    let store = state.store();

    store
        .create_user_at(&NewUser::new("Old", "old@x.com"), "2026-01-01T00:00:00.000000Z".into())
        .await
        .unwrap();
    store
        .create_user_at(&NewUser::new("New", "new@x.com"), "2026-02-01T00:00:00.000000Z".into())
        .await
        .unwrap();

    for (email, at) in [
        ("first@x.com", "2026-03-01T08:00:00.000000Z"),
        ("second@x.com", "2026-03-01T09:00:00.000000Z"),
    ] {
        store
            .record_login_at(
                &NewLoginLog {
                    email: email.to_string(),
                    success: true,
                    ip: None,
                    user_agent: "test".to_string(),
                },
                at.to_string(),
            )
            .await
            .unwrap();
    }

    let (status, body) = send(&app, "GET", "/api/admin/users", Some(ADMIN), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["users"][0]["email"], "new@x.com");
    assert_eq!(body["users"][1]["email"], "old@x.com");
    assert_eq!(body["users"][0]["role"], "user");

    let (status, body) = send(&app, "GET", "/api/admin/logs", Some(ADMIN), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["logs"][0]["email"], "second@x.com");
    assert_eq!(body["logs"][1]["email"], "first@x.com");
    assert_eq!(body["logs"][0]["success"], true);
}

#[tokio::test]
async fn test_cart_items_are_newest_first() {
    let (app, state) = spawn_app().await;
    seed_user(&state, "a@x.com").await;

    for (name, at) in [
        ("Middle", "2026-03-01T09:00:00.000000Z"),
        ("Oldest", "2026-03-01T08:00:00.000000Z"),
        ("Newest", "2026-03-01T10:00:00.000000Z"),
    ] {
        state
            .store()
            .create_cart_item_at(
                &CartItemFields {
                    user_email: "a@x.com".to_string(),
                    name: name.to_string(),
                    price: 5.0,
                    quantity: 1,
                    image: String::new(),
                },
                at.to_string(),
            )
            .await
            .unwrap();
    }

    let (status, body) = send(&app, "GET", "/api/admin/carts", Some(ADMIN), None).await;
    assert_eq!(status, StatusCode::OK);

    let names: Vec<_> = body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Newest", "Middle", "Oldest"]);
}

#[tokio::test]
async fn test_products_are_public() {
    let (app, state) = spawn_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/products",
        None,
        Some(json!({"name": "Lamp", "price": 15, "image": "lamp.png", "category": "home"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Product created successfully");
    assert_eq!(body["product"]["category"], "home");
    assert_eq!(body["product"]["price"], json!(15.0));

    let (status, body) = send(&app, "GET", "/api/products", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["products"].as_array().unwrap().len(), 1);

    assert_eq!(state.store().list_products().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_products_by_category() {
    let (app, state) = spawn_app().await;
    let store = state.store();

    for (name, category, at) in [
        ("Radio", "electronics", "2026-03-01T08:00:00.000000Z"),
        ("Scarf", "clothing", "2026-03-01T08:30:00.000000Z"),
        ("Phone", "electronics", "2026-03-01T09:00:00.000000Z"),
        ("Tablet", "Electronics", "2026-03-01T09:30:00.000000Z"),
    ] {
        store
            .create_product_at(
                &NewProduct {
                    name: name.to_string(),
                    price: 10.0,
                    image: "x.png".to_string(),
                    category: category.to_string(),
                },
                at.to_string(),
            )
            .await
            .unwrap();
    }

    let (status, body) = send(&app, "GET", "/api/products/electronics", None, None).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<_> = body["products"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Phone", "Radio"]);

    let (status, body) = send(&app, "GET", "/api/products/garden", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["products"].as_array().unwrap().is_empty());

    let (_, body) = send(&app, "GET", "/api/products", None, None).await;
    assert_eq!(body["products"][0]["name"], "Tablet");
}

#[tokio::test]
async fn test_create_product_validation() {
    let (app, state) = spawn_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/products",
        None,
        Some(json!({"name": "Lamp", "price": 15, "image": "", "category": "home"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "All fields are required");

    let (status, body) = send(
        &app,
        "POST",
        "/api/products",
        None,
        Some(json!({"name": "Lamp", "price": "cheap", "image": "lamp.png", "category": "home"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Price must be a number");

    assert!(state.store().list_products().await.unwrap().is_empty());

    let (status, body) = send(
        &app,
        "POST",
        "/api/products",
        None,
        Some(json!({"name": "Refund", "price": -3, "image": "r.png", "category": "misc"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["product"]["price"], json!(-3.0));
}

#[tokio::test]
async fn test_store_failure_names_the_action() {
    let (app, state) = spawn_app().await;

    state.store().conn.clone().close().await.unwrap();

    let (status, body) = send(&app, "GET", "/api/admin/users", Some(ADMIN), None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Failed to fetch users");
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_health() {
    let (app, _) = spawn_app().await;

    let (status, body) = send(&app, "GET", "/api/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["uptimeSeconds"].is_u64());
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let (app, _) = spawn_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/products")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.headers().contains_key("x-request-id"));
    assert_eq!(
        response.headers()["x-content-type-options"],
        "nosniff"
    );
}
