//! Handlers for order registration, listing, and status transitions.
//!
//! The delivery and payment transitions carry the guards the old form UI
//! enforced implicitly: payment requires prior delivery, and neither
//! transition may be repeated.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use queijo_core::error::CoreError;
use queijo_core::filter::{self, StatusFilter};
use queijo_core::order::OrderDraft;
use queijo_core::types::DbId;
use queijo_store::{LedgerRecorder, OrderRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the order listing.
#[derive(Debug, serde::Deserialize)]
pub struct ListParams {
    /// Status subset; defaults to all orders.
    pub status: Option<StatusFilter>,
    /// Case-insensitive client name search.
    pub client: Option<String>,
}

/// POST /orders
///
/// Register a new order. Identity, order date, and status flags are
/// assigned by the repository.
pub async fn create_order(
    State(state): State<AppState>,
    Json(draft): Json<OrderDraft>,
) -> AppResult<impl IntoResponse> {
    draft
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let order = OrderRepo::create(state.store.as_ref(), &draft).await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: order })))
}

/// GET /orders?status=&client=
///
/// List orders, optionally narrowed by status subset and client search.
pub async fn list_orders(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let orders = OrderRepo::load_all(state.store.as_ref()).await?;
    let filtered = filter::apply(
        orders,
        params.status.unwrap_or_default(),
        params.client.as_deref(),
    );
    Ok(Json(DataResponse { data: filtered }))
}

/// GET /orders/pending-delivery
///
/// Orders awaiting delivery, in storage order.
pub async fn list_pending_delivery(
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let orders = OrderRepo::load_all(state.store.as_ref()).await?;
    Ok(Json(DataResponse {
        data: filter::pending_delivery(orders),
    }))
}

/// GET /orders/pending-payment
///
/// Delivered orders awaiting payment.
pub async fn list_pending_payment(
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let orders = OrderRepo::load_all(state.store.as_ref()).await?;
    Ok(Json(DataResponse {
        data: filter::pending_payment(orders),
    }))
}

/// POST /orders/{id}/delivery
///
/// Confirm delivery of an order.
pub async fn confirm_delivery(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let store = state.store.as_ref();

    let mut order = OrderRepo::find_by_id(store, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Order", id }))?;

    if order.delivered {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "order {id} is already delivered"
        ))));
    }

    OrderRepo::mark_delivered(store, id).await?;
    order.delivered = true;

    tracing::info!(order_id = id, "Delivery confirmed");
    Ok(Json(DataResponse { data: order }))
}

/// POST /orders/{id}/payment
///
/// Confirm payment of an order and record the derived revenue entry.
///
/// Guards: the order must already be delivered, and must not already be
/// paid. The second guard is what keeps revenue recording single-shot;
/// the recorder itself stays non-idempotent.
pub async fn confirm_payment(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let store = state.store.as_ref();

    let mut order = OrderRepo::find_by_id(store, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Order", id }))?;

    if !order.delivered {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "order {id} has not been delivered yet"
        ))));
    }
    if order.paid {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "order {id} is already paid"
        ))));
    }

    OrderRepo::mark_paid(store, id).await?;
    order.paid = true;

    // The status write succeeded; a revenue failure past this point leaves
    // the ledger behind the order sheet. No compensation, only a loud log.
    if let Err(err) = LedgerRecorder::record_revenue(store, &order).await {
        tracing::error!(order_id = id, error = %err, "Order marked paid but revenue row was not recorded");
        return Err(err.into());
    }

    tracing::info!(order_id = id, amount = order.amount, "Payment confirmed");
    Ok(Json(DataResponse { data: order }))
}
