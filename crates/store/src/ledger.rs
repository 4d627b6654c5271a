//! Append-only revenue and cost ledgers.

use chrono::Utc;

use queijo_core::ledger::CostDraft;
use queijo_core::order::Order;
use queijo_core::types::TIMESTAMP_FORMAT;
use queijo_sheets::TabularStore;

use crate::error::StoreError;
use crate::schema::{COSTS_HEADER, COSTS_SHEET, REVENUE_HEADER, REVENUE_SHEET};

/// Appends derived financial rows, creating each ledger worksheet with its
/// header on first use.
pub struct LedgerRecorder;

impl LedgerRecorder {
    /// Append one revenue row for a paid order, stamped with the current
    /// time as payment timestamp.
    ///
    /// Deliberately not idempotent: calling this twice for the same order
    /// appends two rows. The payment transition in the API layer is the
    /// guard that keeps the duplicate path unreachable.
    pub async fn record_revenue(store: &dyn TabularStore, order: &Order) -> Result<(), StoreError> {
        store.ensure_worksheet(REVENUE_SHEET, &REVENUE_HEADER).await?;
        store
            .append_row(
                REVENUE_SHEET,
                vec![
                    order.id.to_string(),
                    order.client.clone(),
                    format!("{:.2}", order.amount),
                    Utc::now().format(TIMESTAMP_FORMAT).to_string(),
                ],
            )
            .await?;
        tracing::info!(order_id = order.id, amount = order.amount, "Revenue recorded");
        Ok(())
    }

    /// Append one cost row stamped with the current time.
    pub async fn record_cost(store: &dyn TabularStore, cost: &CostDraft) -> Result<(), StoreError> {
        store.ensure_worksheet(COSTS_SHEET, &COSTS_HEADER).await?;
        store
            .append_row(
                COSTS_SHEET,
                vec![
                    cost.description.clone(),
                    format!("{:.2}", cost.amount),
                    cost.category.clone(),
                    Utc::now().format(TIMESTAMP_FORMAT).to_string(),
                ],
            )
            .await?;
        tracing::info!(description = %cost.description, amount = cost.amount, "Cost recorded");
        Ok(())
    }
}
