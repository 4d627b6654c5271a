//! Gateway error taxonomy.
//!
//! Every remote failure is surfaced immediately; the gateway performs no
//! retries and never escalates past the calling operation.

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Authentication or network failure reaching the remote store.
    #[error("Connection failure: {0}")]
    Connection(String),

    /// The named worksheet does not exist in the document.
    #[error("Worksheet not found: {0}")]
    WorksheetNotFound(String),

    /// An append or update was rejected by the remote store.
    #[error("Write rejected: {0}")]
    Write(String),

    /// A malformed value in stored data.
    #[error("Parse failure: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        GatewayError::Connection(err.to_string())
    }
}
