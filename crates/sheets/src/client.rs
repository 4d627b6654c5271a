//! Google Sheets v4 REST adapter.
//!
//! Wraps the `values.append`, `values.update`, `values.get`,
//! `spreadsheets.get`, and `batchUpdate/addSheet` endpoints using
//! [`reqwest`]. No retries and no timeout beyond the client defaults;
//! every failure maps to [`GatewayError`] and surfaces immediately.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::auth::{ServiceAccountKey, TokenProvider};
use crate::error::GatewayError;
use crate::store::{records_from_grid, Record, TabularStore};

/// The document this deployment works against. Fixed by design; there is
/// no configuration override.
pub const SPREADSHEET_KEY: &str = "1zC83wcNXDQjipQhdH9f25RFxzzm69RTV96WwWHy0QgU";

const API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// Production [`TabularStore`] backed by the Sheets REST API.
pub struct SheetsStore {
    http: reqwest::Client,
    tokens: TokenProvider,
    spreadsheet_id: String,
}

/// Payload of `values.get`.
#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<serde_json::Value>>,
}

/// Subset of `spreadsheets.get` listing worksheet titles.
#[derive(Debug, Deserialize)]
struct SpreadsheetMeta {
    #[serde(default)]
    sheets: Vec<SheetEntry>,
}

#[derive(Debug, Deserialize)]
struct SheetEntry {
    properties: SheetProperties,
}

#[derive(Debug, Deserialize)]
struct SheetProperties {
    title: String,
}

impl SheetsStore {
    /// Open the gateway against the fixed document, resolving credentials
    /// from the environment.
    pub fn open() -> Result<Self, GatewayError> {
        Ok(Self::with_key(ServiceAccountKey::resolve()?))
    }

    /// Open the gateway with an explicitly supplied credential.
    pub fn with_key(key: ServiceAccountKey) -> Self {
        let http = reqwest::Client::new();
        Self {
            tokens: TokenProvider::new(key, http.clone()),
            http,
            spreadsheet_id: SPREADSHEET_KEY.to_string(),
        }
    }

    fn url(&self, suffix: &str) -> String {
        format!("{API_BASE}/{}{suffix}", self.spreadsheet_id)
    }

    async fn bearer(&self) -> Result<String, GatewayError> {
        self.tokens.bearer_token().await
    }

    /// Map a non-success response to the gateway taxonomy.
    async fn fail(
        sheet: &str,
        writing: bool,
        response: reqwest::Response,
    ) -> GatewayError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        match status.as_u16() {
            401 | 403 => GatewayError::Connection(format!("auth rejected ({status}): {body}")),
            400 | 404 if body.contains("Unable to parse range") => {
                GatewayError::WorksheetNotFound(sheet.to_string())
            }
            404 => GatewayError::WorksheetNotFound(sheet.to_string()),
            _ if writing => GatewayError::Write(format!("{status}: {body}")),
            _ => GatewayError::Connection(format!("{status}: {body}")),
        }
    }

    async fn list_worksheets(&self) -> Result<Vec<String>, GatewayError> {
        let token = self.bearer().await?;
        let response = self
            .http
            .get(self.url("?fields=sheets.properties.title"))
            .bearer_auth(token)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Connection(format!(
                "cannot read spreadsheet metadata ({status}): {body}"
            )));
        }

        let meta: SpreadsheetMeta = response
            .json()
            .await
            .map_err(|e| GatewayError::Parse(format!("malformed spreadsheet metadata: {e}")))?;
        Ok(meta.sheets.into_iter().map(|s| s.properties.title).collect())
    }
}

/// Spell a 1-based column index in A1 notation (1 -> A, 27 -> AA).
pub fn column_letter(col: u32) -> String {
    debug_assert!(col >= 1);
    let mut n = col;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push((b'A' + rem as u8) as char);
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

/// Render a cell value as the string the repository layer works with.
fn cell_to_string(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[async_trait]
impl TabularStore for SheetsStore {
    async fn append_row(&self, sheet: &str, row: Vec<String>) -> Result<(), GatewayError> {
        let token = self.bearer().await?;
        let response = self
            .http
            .post(self.url(&format!(
                "/values/{sheet}:append?valueInputOption=USER_ENTERED"
            )))
            .bearer_auth(token)
            .json(&json!({ "values": [row] }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::fail(sheet, true, response).await);
        }
        tracing::debug!(%sheet, "Appended one row");
        Ok(())
    }

    async fn update_cell(
        &self,
        sheet: &str,
        row: u32,
        col: u32,
        value: &str,
    ) -> Result<(), GatewayError> {
        let range = format!("{sheet}!{}{row}", column_letter(col));
        let token = self.bearer().await?;
        let response = self
            .http
            .put(self.url(&format!(
                "/values/{range}?valueInputOption=USER_ENTERED"
            )))
            .bearer_auth(token)
            .json(&json!({ "values": [[value]] }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::fail(sheet, true, response).await);
        }
        tracing::debug!(%range, %value, "Updated cell");
        Ok(())
    }

    async fn get_all_records(&self, sheet: &str) -> Result<Vec<Record>, GatewayError> {
        let token = self.bearer().await?;
        let response = self
            .http
            .get(self.url(&format!("/values/{sheet}")))
            .bearer_auth(token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::fail(sheet, false, response).await);
        }

        let range: ValueRange = response
            .json()
            .await
            .map_err(|e| GatewayError::Parse(format!("malformed value range: {e}")))?;

        let grid = range
            .values
            .into_iter()
            .map(|row| row.iter().map(cell_to_string).collect())
            .collect();
        Ok(records_from_grid(grid))
    }

    async fn ensure_worksheet(&self, name: &str, header: &[&str]) -> Result<(), GatewayError> {
        // Check-then-act: a concurrent caller may create the sheet between
        // the lookup and the batchUpdate. Single-user deployment hazard,
        // documented on the trait.
        let titles = self.list_worksheets().await?;
        if titles.iter().any(|t| t == name) {
            return Ok(());
        }

        let token = self.bearer().await?;
        let response = self
            .http
            .post(self.url(":batchUpdate"))
            .bearer_auth(token)
            .json(&json!({
                "requests": [{ "addSheet": { "properties": { "title": name } } }]
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::fail(name, true, response).await);
        }
        tracing::info!(worksheet = %name, "Created worksheet");

        self.append_row(name, header.iter().map(|h| h.to_string()).collect())
            .await
    }

    async fn health_check(&self) -> Result<(), GatewayError> {
        self.list_worksheets().await.map(|_| ())
    }
}
