mod postgres;

pub use postgres::PgReturnReasonService;

use super::{
    repository::{Filters, ReturnReason},
    selection::FindConfig,
};
use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    InvalidData(String),
    #[error("{0}")]
    Conflict(String),
    #[error("An unexpected error occurred")]
    Unexpected,
}

impl Error {
    pub fn not_found(id: &str) -> Self {
        Self::NotFound(format!("Return Reason with id: {} was not found", id))
    }
}

/// Read access to return reasons. Relations are only populated when `config` asks for them.
#[async_trait]
pub trait ReturnReasonService: Send + Sync {
    async fn retrieve(&self, id: &str, config: &FindConfig) -> Result<ReturnReason, Error>;

    async fn list(&self, filters: &Filters, config: &FindConfig)
        -> Result<Vec<ReturnReason>, Error>;
}

pub fn validate_id(id: &str) -> Result<(), Error> {
    if id.trim().is_empty() {
        return Err(Error::InvalidData(String::from(
            "\"returnReasonId\" must be defined",
        )));
    }

    Ok(())
}
