use sqlx::PgPool;
use thiserror::Error;

use crate::adapter::store::pg::sqlx_transaction::SqlxTransaction;
use crate::adapter::store::pg::transaction::{TransactionError, TransactionWrapper};
use crate::adapter::store::pg::transaction_operation::{
    TransactionOperation, TransactionOperationError,
};

#[derive(Debug, Error)]
pub enum TransactionManagerError {
    #[error("Failed to begin transaction: {0}")]
    BeginError(String),

    #[error(transparent)]
    OperationError(#[from] TransactionOperationError),

    #[error(transparent)]
    TransactionError(#[from] TransactionError),
}

pub struct PgTransactionManager {
    pool: PgPool,
}

impl PgTransactionManager {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn execute<O>(&self, operation: O) -> Result<O::Output, TransactionManagerError>
    where
        O: TransactionOperation,
    {
        let transaction: Box<dyn TransactionWrapper> = Box::new(SqlxTransaction::new(
            self.pool
                .begin()
                .await
                .map_err(|e| TransactionManagerError::BeginError(e.to_string()))?,
        ));

        run_in_transaction(transaction, &operation).await
    }
}

/// Commits when `operation` succeeds and rolls back otherwise.
pub async fn run_in_transaction<O>(
    mut transaction: Box<dyn TransactionWrapper>,
    operation: &O,
) -> Result<O::Output, TransactionManagerError>
where
    O: TransactionOperation,
{
    match operation.execute(&mut transaction).await {
        Ok(result) => {
            transaction.commit().await?;
            Ok(result)
        }
        Err(e) => {
            if let Err(rollback_err) = transaction.rollback().await {
                tracing::error!(error = %rollback_err, operation_error = %e, "rollback failed");
                return Err(TransactionManagerError::TransactionError(rollback_err));
            }
            Err(TransactionManagerError::OperationError(e))
        }
    }
}
