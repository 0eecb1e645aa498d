use async_trait::async_trait;
use thiserror::Error;

use crate::adapter::store::pg::transaction::{TransactionError, TransactionWrapper};
use crate::core::domain::command::CommandError;
use crate::core::domain::query::QueryError;

#[derive(Debug, Error)]
pub enum TransactionOperationError {
    #[error(transparent)]
    TransactionError(#[from] TransactionError),

    #[error(transparent)]
    CommandError(#[from] CommandError),

    #[error(transparent)]
    QueryError(#[from] QueryError),
}

/// A unit of work run inside a single transaction.
#[async_trait]
pub trait TransactionOperation: Send + Sync {
    type Output: Send;

    async fn execute(
        &self,
        transaction: &mut Box<dyn TransactionWrapper>,
    ) -> Result<Self::Output, TransactionOperationError>;
}
