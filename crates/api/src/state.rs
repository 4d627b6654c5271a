use std::sync::Arc;

use queijo_sheets::TabularStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything is behind `Arc`. There is deliberately no
/// cached order list here: the spreadsheet is the source of truth and every
/// request reads through the store handle.
#[derive(Clone)]
pub struct AppState {
    /// Gateway to the tabular store (Google Sheets in production).
    pub store: Arc<dyn TabularStore>,
    /// Server configuration (not read by current handlers; kept on state
    /// for middleware and handlers that need limits or origins later).
    pub config: Arc<ServerConfig>,
}
