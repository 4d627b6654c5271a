use queijo_core::types::DbId;
use queijo_sheets::GatewayError;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Malformed stored data: {0}")]
    Parse(String),
}
