//! Integration tests for the order lifecycle over HTTP.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{body_json, get, post, post_json};
use queijo_store::schema::REVENUE_SHEET;

fn order_body(client: &str) -> serde_json::Value {
    json!({
        "client": client,
        "product": "Queijo",
        "quantity": 2,
        "amount": 40.0,
    })
}

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_order_returns_201_with_assigned_id_and_defaults() {
    let store = common::seeded_store().await;
    let response = post_json(
        common::build_test_app(store),
        "/api/v1/orders",
        order_body("Maria"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], 1);
    assert_eq!(json["data"]["client"], "Maria");
    assert_eq!(json["data"]["delivered"], false);
    assert_eq!(json["data"]["paid"], false);
}

#[tokio::test]
async fn create_order_rejects_empty_client() {
    let store = common::seeded_store().await;
    let response = post_json(
        common::build_test_app(store),
        "/api/v1/orders",
        order_body(""),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn create_order_rejects_unknown_product() {
    let store = common::seeded_store().await;
    let response = post_json(
        common::build_test_app(store),
        "/api/v1/orders",
        json!({
            "client": "Maria",
            "product": "Requeijão",
            "quantity": 1,
            "amount": 10.0,
        }),
    )
    .await;

    // Unknown enum variant fails JSON deserialization.
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// ---------------------------------------------------------------------------
// Listing and filters
// ---------------------------------------------------------------------------

#[tokio::test]
async fn listing_supports_status_and_client_filters() {
    let store = common::seeded_store().await;

    for client in ["Maria", "João", "Ana Silva"] {
        let response = post_json(
            common::build_test_app(store.clone()),
            "/api/v1/orders",
            order_body(client),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    // Deliver order 1, deliver and pay order 3.
    post(common::build_test_app(store.clone()), "/api/v1/orders/1/delivery").await;
    post(common::build_test_app(store.clone()), "/api/v1/orders/3/delivery").await;
    post(common::build_test_app(store.clone()), "/api/v1/orders/3/payment").await;

    let json = body_json(
        get(
            common::build_test_app(store.clone()),
            "/api/v1/orders?status=delivered-unpaid",
        )
        .await,
    )
    .await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"][0]["id"], 1);

    let json = body_json(
        get(
            common::build_test_app(store.clone()),
            "/api/v1/orders?status=pending-delivery",
        )
        .await,
    )
    .await;
    assert_eq!(json["data"][0]["id"], 2);

    let json = body_json(
        get(
            common::build_test_app(store.clone()),
            "/api/v1/orders?status=paid",
        )
        .await,
    )
    .await;
    assert_eq!(json["data"][0]["id"], 3);

    // Case-insensitive client search.
    let json = body_json(
        get(
            common::build_test_app(store.clone()),
            "/api/v1/orders?client=ana",
        )
        .await,
    )
    .await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"][0]["client"], "Ana Silva");
}

#[tokio::test]
async fn pending_views_reflect_transitions() {
    let store = common::seeded_store().await;
    post_json(
        common::build_test_app(store.clone()),
        "/api/v1/orders",
        order_body("Maria"),
    )
    .await;

    let json = body_json(
        get(
            common::build_test_app(store.clone()),
            "/api/v1/orders/pending-delivery",
        )
        .await,
    )
    .await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    post(common::build_test_app(store.clone()), "/api/v1/orders/1/delivery").await;

    let json = body_json(
        get(
            common::build_test_app(store.clone()),
            "/api/v1/orders/pending-payment",
        )
        .await,
    )
    .await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"][0]["id"], 1);
}

// ---------------------------------------------------------------------------
// Transitions and guards
// ---------------------------------------------------------------------------

#[tokio::test]
async fn payment_before_delivery_is_a_conflict() {
    let store = common::seeded_store().await;
    post_json(
        common::build_test_app(store.clone()),
        "/api/v1/orders",
        order_body("Maria"),
    )
    .await;

    let response = post(common::build_test_app(store), "/api/v1/orders/1/payment").await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
}

#[tokio::test]
async fn double_delivery_is_a_conflict() {
    let store = common::seeded_store().await;
    post_json(
        common::build_test_app(store.clone()),
        "/api/v1/orders",
        order_body("Maria"),
    )
    .await;

    let first = post(common::build_test_app(store.clone()), "/api/v1/orders/1/delivery").await;
    assert_eq!(first.status(), StatusCode::OK);

    let second = post(common::build_test_app(store), "/api/v1/orders/1/delivery").await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn transition_on_missing_order_returns_404() {
    let store = common::seeded_store().await;
    let response = post(common::build_test_app(store), "/api/v1/orders/99/delivery").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn payment_records_exactly_one_revenue_row() {
    let store = common::seeded_store().await;
    post_json(
        common::build_test_app(store.clone()),
        "/api/v1/orders",
        order_body("Maria"),
    )
    .await;
    post(common::build_test_app(store.clone()), "/api/v1/orders/1/delivery").await;

    let response = post(common::build_test_app(store.clone()), "/api/v1/orders/1/payment").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["paid"], true);

    // Second payment attempt is refused and must not add a revenue row.
    let again = post(common::build_test_app(store.clone()), "/api/v1/orders/1/payment").await;
    assert_eq!(again.status(), StatusCode::CONFLICT);

    let revenue = store.raw_rows(REVENUE_SHEET).await.unwrap();
    assert_eq!(revenue.len(), 2, "header plus exactly one revenue row");
    assert_eq!(revenue[1][0], "1");
    assert_eq!(revenue[1][2], "40.00");
}
