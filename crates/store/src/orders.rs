//! Repository for the primary `Pedidos` worksheet.

use chrono::{TimeZone, Utc};

use queijo_core::marker;
use queijo_core::order::{Order, OrderDraft, Product};
use queijo_core::types::{DbId, TIMESTAMP_FORMAT};
use queijo_sheets::{Record, TabularStore};

use crate::error::StoreError;
use crate::schema::{ORDERS_HEADER, ORDERS_SHEET};

/// Offset from a record's position in `get_all_records` to its 1-based
/// sheet row: row 1 is the header, the first record sits on row 2.
const HEADER_ROW_OFFSET: u32 = 2;

/// Provides CRUD operations for orders.
///
/// Methods take the store handle as the first argument, mirroring the
/// one-connection-per-operation model: there is no pooled or cached state
/// here and no lock coordinating concurrent callers.
pub struct OrderRepo;

impl OrderRepo {
    /// Create the primary worksheet with its header if the document does
    /// not have it yet. Called once at startup.
    pub async fn ensure_sheet(store: &dyn TabularStore) -> Result<(), StoreError> {
        store.ensure_worksheet(ORDERS_SHEET, &ORDERS_HEADER).await?;
        Ok(())
    }

    /// Next sequential order id: `max(existing) + 1`, or 1 when the sheet
    /// is empty or unreadable. Stored ids that do not parse as
    /// non-negative integers are ignored.
    ///
    /// NOT concurrency-safe: two callers racing here can observe the same
    /// value and produce duplicate ids. Known hazard of the sequential
    /// scheme; acceptable for a single-user deployment.
    pub async fn next_id(store: &dyn TabularStore) -> DbId {
        let records = match store.get_all_records(ORDERS_SHEET).await {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!(error = %err, "Cannot read orders for id assignment, starting at 1");
                return 1;
            }
        };

        records
            .iter()
            .filter_map(|r| r.get("id"))
            .filter_map(|id| id.trim().parse::<DbId>().ok())
            .filter(|id| *id >= 0)
            .max()
            .unwrap_or(0)
            + 1
    }

    /// Register a new order: stamp the order date, default both status
    /// flags to false, assign the next id, and append one row.
    ///
    /// The populated order is returned even though a failed append leaves
    /// nothing in the sheet; the caller sees the error and must not treat
    /// the returned value as persisted in that case.
    pub async fn create(
        store: &dyn TabularStore,
        draft: &OrderDraft,
    ) -> Result<Order, StoreError> {
        let order = Order {
            id: Self::next_id(store).await,
            client: draft.client.clone(),
            product: draft.product,
            quantity: draft.quantity,
            amount: draft.amount,
            ordered_at: Utc::now(),
            delivered: false,
            paid: false,
        };

        store.append_row(ORDERS_SHEET, encode_row(&order)).await?;
        tracing::info!(order_id = order.id, client = %order.client, "Order registered");
        Ok(order)
    }

    /// All orders in storage order.
    ///
    /// Rows that fail to decode are skipped with a warning so one
    /// malformed row cannot hide the rest; a failure to read the sheet
    /// itself is an error.
    pub async fn load_all(store: &dyn TabularStore) -> Result<Vec<Order>, StoreError> {
        let records = store.get_all_records(ORDERS_SHEET).await?;
        let mut orders = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            match order_from_record(record) {
                Ok(order) => orders.push(order),
                Err(err) => {
                    tracing::warn!(row = index as u32 + HEADER_ROW_OFFSET, error = %err, "Skipping malformed order row");
                }
            }
        }
        Ok(orders)
    }

    /// Find one order by id. Linear scan, decode failures skipped as in
    /// [`Self::load_all`].
    pub async fn find_by_id(
        store: &dyn TabularStore,
        id: DbId,
    ) -> Result<Option<Order>, StoreError> {
        Ok(Self::load_all(store).await?.into_iter().find(|o| o.id == id))
    }

    /// Write `value` into `field` for the order with the given id.
    ///
    /// Scans records in storage order for a stringified id match, resolves
    /// the column case-insensitively against the stored header, and
    /// updates exactly that cell. A missing id reports not-found with
    /// zero writes.
    pub async fn update_status(
        store: &dyn TabularStore,
        id: DbId,
        field: &str,
        value: &str,
    ) -> Result<(), StoreError> {
        let records = store.get_all_records(ORDERS_SHEET).await?;
        let wanted = id.to_string();

        for (index, record) in records.iter().enumerate() {
            if record.get("id").map(str::trim) != Some(wanted.as_str()) {
                continue;
            }
            let col = record.position(field).ok_or_else(|| {
                StoreError::Parse(format!("column '{field}' not present in '{ORDERS_SHEET}'"))
            })?;
            store
                .update_cell(
                    ORDERS_SHEET,
                    index as u32 + HEADER_ROW_OFFSET,
                    col as u32 + 1,
                    value,
                )
                .await?;
            tracing::info!(order_id = id, %field, %value, "Order status updated");
            return Ok(());
        }

        Err(StoreError::NotFound { entity: "Order", id })
    }

    /// Mark an order delivered.
    pub async fn mark_delivered(store: &dyn TabularStore, id: DbId) -> Result<(), StoreError> {
        Self::update_status(store, id, crate::schema::COL_DELIVERED, marker::YES).await
    }

    /// Mark an order paid. Callers are expected to have checked the
    /// delivered-first invariant; the repository itself is permissive.
    pub async fn mark_paid(store: &dyn TabularStore, id: DbId) -> Result<(), StoreError> {
        Self::update_status(store, id, crate::schema::COL_PAID, marker::YES).await
    }
}

/// Encode an order as one sheet row in the fixed column order.
fn encode_row(order: &Order) -> Vec<String> {
    vec![
        order.id.to_string(),
        order.client.clone(),
        order.product.as_str().to_string(),
        order.quantity.to_string(),
        format!("{:.2}", order.amount),
        order.ordered_at.format(TIMESTAMP_FORMAT).to_string(),
        marker::encode(order.delivered).to_string(),
        marker::encode(order.paid).to_string(),
    ]
}

/// Decode a header-keyed record into an order.
fn order_from_record(record: &Record) -> Result<Order, StoreError> {
    let field = |key: &str| -> Result<&str, StoreError> {
        record
            .get(key)
            .ok_or_else(|| StoreError::Parse(format!("missing column '{key}'")))
    };

    let id = field("id")?
        .trim()
        .parse::<DbId>()
        .map_err(|_| StoreError::Parse(format!("bad id '{}'", field("id").unwrap_or(""))))?;

    let product_raw = field("produto")?;
    let product = Product::parse(product_raw)
        .ok_or_else(|| StoreError::Parse(format!("unknown product '{product_raw}'")))?;

    let quantity = field("quantidade")?
        .trim()
        .parse::<u32>()
        .map_err(|_| StoreError::Parse("bad quantity".into()))?;

    let amount = field("valor")?
        .trim()
        .replace(',', ".")
        .parse::<f64>()
        .map_err(|_| StoreError::Parse("bad amount".into()))?;

    let ordered_at = chrono::NaiveDateTime::parse_from_str(field("data_pedido")?.trim(), TIMESTAMP_FORMAT)
        .map(|naive| Utc.from_utc_datetime(&naive))
        .map_err(|_| StoreError::Parse("bad order date".into()))?;

    Ok(Order {
        id,
        client: field("cliente")?.to_string(),
        product,
        quantity,
        amount,
        ordered_at,
        delivered: marker::decode(field("entregue")?),
        paid: marker::decode(field("pago")?),
    })
}
