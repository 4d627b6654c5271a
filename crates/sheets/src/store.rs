//! The tabular store seam.
//!
//! The repository layer depends on this trait, not on any concrete
//! spreadsheet client; the Google Sheets adapter is one implementation.

use async_trait::async_trait;

use crate::error::GatewayError;

/// One data row keyed by the worksheet's header, in column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn new(fields: Vec<(String, String)>) -> Self {
        Self { fields }
    }

    /// Value of the field whose header matches `key` case-insensitively.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// Zero-based column position of `key` among the record's headers,
    /// matched case-insensitively.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.fields
            .iter()
            .position(|(k, _)| k.eq_ignore_ascii_case(key))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Build records from a raw cell grid: the first row is the header, each
/// following row maps to it positionally. Short rows pad with empty
/// strings, extra cells beyond the header are dropped. An empty grid (or
/// header-only grid) yields no records.
pub fn records_from_grid(grid: Vec<Vec<String>>) -> Vec<Record> {
    let mut rows = grid.into_iter();
    let Some(header) = rows.next() else {
        return Vec::new();
    };

    rows.map(|row| {
        let fields = header
            .iter()
            .enumerate()
            .map(|(i, key)| (key.clone(), row.get(i).cloned().unwrap_or_default()))
            .collect();
        Record::new(fields)
    })
    .collect()
}

/// Row-level access to a remote tabular document.
///
/// All row and column indices are 1-based, matching the remote store's
/// addressing: row 1 is the header, the first data row is row 2.
#[async_trait]
pub trait TabularStore: Send + Sync {
    /// Append one row to the end of a worksheet.
    async fn append_row(&self, sheet: &str, row: Vec<String>) -> Result<(), GatewayError>;

    /// Overwrite a single cell.
    async fn update_cell(
        &self,
        sheet: &str,
        row: u32,
        col: u32,
        value: &str,
    ) -> Result<(), GatewayError>;

    /// All data rows of a worksheet as header-keyed records, in storage
    /// order.
    async fn get_all_records(&self, sheet: &str) -> Result<Vec<Record>, GatewayError>;

    /// Create the worksheet with the given header row if it does not
    /// exist yet; a no-op when it does.
    ///
    /// This is a check-then-act against the remote store: two callers
    /// racing here may both attempt creation. Known hazard, acceptable
    /// for a single-user deployment.
    async fn ensure_worksheet(&self, name: &str, header: &[&str]) -> Result<(), GatewayError>;

    /// Cheap reachability probe for the health endpoint.
    async fn health_check(&self) -> Result<(), GatewayError>;
}
