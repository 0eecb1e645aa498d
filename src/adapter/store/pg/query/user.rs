use async_trait::async_trait;

use crate::adapter::store::pg::command::user::PgUserRepository;
use crate::adapter::store::pg::transaction::{ToSql, TransactionWrapper};
use crate::adapter::store::pg::transaction_manager::TransactionManagerError;
use crate::adapter::store::pg::transaction_operation::{
    TransactionOperation, TransactionOperationError,
};
use crate::adapter::store::pg::{users_from_records, USER_COLUMNS};
use crate::core::domain::entity::user::{User, UserQuery};
use crate::core::domain::query::QueryError;

fn query_error(error: TransactionManagerError) -> QueryError {
    match error {
        TransactionManagerError::OperationError(TransactionOperationError::QueryError(e)) => e,
        other => QueryError::DatabaseError(other.to_string()),
    }
}

pub struct SelectUsersOperation;

#[async_trait]
impl TransactionOperation for SelectUsersOperation {
    type Output = Vec<User>;

    async fn execute(
        &self,
        transaction: &mut Box<dyn TransactionWrapper>,
    ) -> Result<Vec<User>, TransactionOperationError> {
        let query = format!("SELECT {} FROM users ORDER BY id", USER_COLUMNS);
        let records = transaction.fetch_all(&query, Vec::new()).await?;
        Ok(users_from_records(&records)?)
    }
}

pub struct SelectUserOperation {
    id: i32,
}

impl SelectUserOperation {
    pub fn new(id: i32) -> Self {
        Self { id }
    }
}

#[async_trait]
impl TransactionOperation for SelectUserOperation {
    type Output = User;

    async fn execute(
        &self,
        transaction: &mut Box<dyn TransactionWrapper>,
    ) -> Result<User, TransactionOperationError> {
        let query = format!("SELECT {} FROM users WHERE id = $1", USER_COLUMNS);
        let params: Vec<Box<dyn ToSql>> = vec![Box::new(self.id) as Box<dyn ToSql>];
        let records = transaction.fetch_all(&query, params).await?;
        users_from_records(&records)?
            .into_iter()
            .next()
            .ok_or_else(|| QueryError::user_not_found(self.id).into())
    }
}

#[async_trait]
impl UserQuery for PgUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, QueryError> {
        self.transaction_manager
            .execute(SelectUsersOperation)
            .await
            .map_err(query_error)
    }

    async fn find_by_id(&self, id: i32) -> Result<User, QueryError> {
        self.transaction_manager
            .execute(SelectUserOperation::new(id))
            .await
            .map_err(query_error)
    }
}
