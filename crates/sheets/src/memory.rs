//! In-memory tabular store.
//!
//! Mirrors the observable semantics of the Sheets adapter (1-based
//! addressing, header row, storage order) so the repository and API layers
//! can be exercised without the remote service.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::GatewayError;
use crate::store::{records_from_grid, Record, TabularStore};

#[derive(Debug, Default)]
struct Worksheet {
    name: String,
    rows: Vec<Vec<String>>,
}

/// In-process [`TabularStore`] backed by a mutex-guarded cell grid.
#[derive(Debug, Default)]
pub struct MemoryStore {
    sheets: Mutex<Vec<Worksheet>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw rows of a worksheet, header included. Test helper.
    pub async fn raw_rows(&self, sheet: &str) -> Option<Vec<Vec<String>>> {
        let sheets = self.sheets.lock().await;
        sheets
            .iter()
            .find(|w| w.name == sheet)
            .map(|w| w.rows.clone())
    }

    /// Whether a worksheet exists. Test helper.
    pub async fn has_worksheet(&self, sheet: &str) -> bool {
        let sheets = self.sheets.lock().await;
        sheets.iter().any(|w| w.name == sheet)
    }
}

#[async_trait]
impl TabularStore for MemoryStore {
    async fn append_row(&self, sheet: &str, row: Vec<String>) -> Result<(), GatewayError> {
        let mut sheets = self.sheets.lock().await;
        let ws = sheets
            .iter_mut()
            .find(|w| w.name == sheet)
            .ok_or_else(|| GatewayError::WorksheetNotFound(sheet.to_string()))?;
        ws.rows.push(row);
        Ok(())
    }

    async fn update_cell(
        &self,
        sheet: &str,
        row: u32,
        col: u32,
        value: &str,
    ) -> Result<(), GatewayError> {
        if row == 0 || col == 0 {
            return Err(GatewayError::Write("cell addresses are 1-based".into()));
        }
        let mut sheets = self.sheets.lock().await;
        let ws = sheets
            .iter_mut()
            .find(|w| w.name == sheet)
            .ok_or_else(|| GatewayError::WorksheetNotFound(sheet.to_string()))?;
        let cells = ws.rows.get_mut(row as usize - 1).ok_or_else(|| {
            GatewayError::Write(format!("row {row} out of range in '{sheet}'"))
        })?;
        // Sheets accepts writes past the current row width.
        if cells.len() < col as usize {
            cells.resize(col as usize, String::new());
        }
        cells[col as usize - 1] = value.to_string();
        Ok(())
    }

    async fn get_all_records(&self, sheet: &str) -> Result<Vec<Record>, GatewayError> {
        let sheets = self.sheets.lock().await;
        let ws = sheets
            .iter()
            .find(|w| w.name == sheet)
            .ok_or_else(|| GatewayError::WorksheetNotFound(sheet.to_string()))?;
        Ok(records_from_grid(ws.rows.clone()))
    }

    async fn ensure_worksheet(&self, name: &str, header: &[&str]) -> Result<(), GatewayError> {
        let mut sheets = self.sheets.lock().await;
        if sheets.iter().any(|w| w.name == name) {
            return Ok(());
        }
        sheets.push(Worksheet {
            name: name.to_string(),
            rows: vec![header.iter().map(|h| h.to_string()).collect()],
        });
        Ok(())
    }

    async fn health_check(&self) -> Result<(), GatewayError> {
        Ok(())
    }
}
