use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum OrderError {
    #[error("order not found: {0}")]
    OrderNotFound(Uuid),

    /// A seed row the service depends on is absent. Deployment defect.
    #[error("reference data missing: {0}")]
    ReferenceDataMissing(String),

    #[error("invalid order status: {0:?}")]
    InvalidStatus(String),

    #[error("invalid order request: {0}")]
    InvalidRequest(String),

    #[error("unknown {kind}: {id}")]
    UnknownReference { kind: &'static str, id: Uuid },

    #[error("malformed identifier: expected 16 bytes, got {0}")]
    InvalidIdentifier(usize),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("amount overflow: {0}")]
    AmountOverflow(String),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl OrderError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, OrderError::OrderNotFound(_))
    }

    /// Errors caused by the caller's input rather than the deployment or the store.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            OrderError::OrderNotFound(_)
                | OrderError::InvalidStatus(_)
                | OrderError::InvalidRequest(_)
                | OrderError::UnknownReference { .. }
        )
    }
}

pub type OrderResult<T> = Result<T, OrderError>;
