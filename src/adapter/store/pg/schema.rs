use async_trait::async_trait;

use crate::adapter::store::pg::transaction::TransactionWrapper;
use crate::adapter::store::pg::transaction_manager::{
    PgTransactionManager, TransactionManagerError,
};
use crate::adapter::store::pg::transaction_operation::{
    TransactionOperation, TransactionOperationError,
};

const CREATE_USERS_TABLE: &str = "CREATE TABLE IF NOT EXISTS users (\
    id SERIAL PRIMARY KEY, \
    name TEXT NOT NULL, \
    email TEXT NOT NULL UNIQUE\
)";

pub struct CreateUsersTableOperation;

#[async_trait]
impl TransactionOperation for CreateUsersTableOperation {
    type Output = ();

    async fn execute(
        &self,
        transaction: &mut Box<dyn TransactionWrapper>,
    ) -> Result<(), TransactionOperationError> {
        transaction.execute(CREATE_USERS_TABLE, Vec::new()).await?;
        Ok(())
    }
}

/// Creates the `users` table when it does not exist yet.
pub async fn ensure_schema(
    transaction_manager: &PgTransactionManager,
) -> Result<(), TransactionManagerError> {
    transaction_manager.execute(CreateUsersTableOperation).await
}
