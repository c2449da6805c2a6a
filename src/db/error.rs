use crate::models::snapshot::UnknownLabel;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to connect to database: {0}")]
    Connection(#[source] tokio_postgres::Error),

    #[error("database query failed: {0}")]
    Query(#[from] tokio_postgres::Error),

    #[error("invalid stored value: {0}")]
    Decode(String),

    #[error("failed to write snapshot for security {security_id}: {reason}")]
    Write { security_id: i64, reason: String },
}

impl From<UnknownLabel> for StoreError {
    fn from(err: UnknownLabel) -> Self {
        StoreError::Decode(err.to_string())
    }
}
