pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /orders                       list (GET), register (POST)
/// /orders/pending-delivery      delivery page list
/// /orders/pending-payment       payment page list
/// /orders/{id}/delivery         confirm delivery (POST)
/// /orders/{id}/payment          confirm payment (POST)
/// /costs                        record a cost (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/orders",
            get(handlers::orders::list_orders).post(handlers::orders::create_order),
        )
        .route(
            "/orders/pending-delivery",
            get(handlers::orders::list_pending_delivery),
        )
        .route(
            "/orders/pending-payment",
            get(handlers::orders::list_pending_payment),
        )
        .route(
            "/orders/{id}/delivery",
            post(handlers::orders::confirm_delivery),
        )
        .route(
            "/orders/{id}/payment",
            post(handlers::orders::confirm_payment),
        )
        .route("/costs", post(handlers::costs::record_cost))
}
