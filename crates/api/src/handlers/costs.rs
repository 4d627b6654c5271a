//! Cost registration handler.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use queijo_core::ledger::CostDraft;
use queijo_store::LedgerRecorder;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /costs
///
/// Append one cost entry to the cost ledger, creating the worksheet on
/// first use.
pub async fn record_cost(
    State(state): State<AppState>,
    Json(draft): Json<CostDraft>,
) -> AppResult<impl IntoResponse> {
    draft
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    LedgerRecorder::record_cost(state.store.as_ref(), &draft).await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: draft })))
}
