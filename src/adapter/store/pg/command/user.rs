use async_trait::async_trait;
use std::sync::Arc;

use crate::adapter::store::pg::transaction::{
    Record, ToSql, TransactionError, TransactionWrapper,
};
use crate::adapter::store::pg::transaction_manager::{
    PgTransactionManager, TransactionManagerError,
};
use crate::adapter::store::pg::transaction_operation::{
    TransactionOperation, TransactionOperationError,
};
use crate::adapter::store::pg::{users_from_records, USER_COLUMNS};
use crate::core::domain::command::CommandError;
use crate::core::domain::entity::user::{NewUser, User, UserCommand};

pub struct PgUserRepository {
    pub(crate) transaction_manager: Arc<PgTransactionManager>,
}

impl PgUserRepository {
    pub fn new(transaction_manager: Arc<PgTransactionManager>) -> Self {
        Self {
            transaction_manager,
        }
    }
}

fn command_error(error: TransactionManagerError) -> CommandError {
    match error {
        TransactionManagerError::OperationError(TransactionOperationError::CommandError(e)) => e,
        other => CommandError::DatabaseError(other.to_string()),
    }
}

/// Maps a failed write on `user` into the domain error it stands for.
fn write_error(user: &NewUser, error: TransactionError) -> TransactionOperationError {
    match error {
        TransactionError::UniqueViolation(_) => CommandError::user_email_taken(&user.email).into(),
        other => other.into(),
    }
}

fn single_user(
    records: Vec<Record>,
    missing: impl FnOnce() -> CommandError,
) -> Result<User, TransactionOperationError> {
    users_from_records(&records)?
        .into_iter()
        .next()
        .ok_or_else(|| missing().into())
}

pub struct InsertUserOperation {
    user: NewUser,
}

impl InsertUserOperation {
    pub fn new(user: NewUser) -> Self {
        Self { user }
    }
}

#[async_trait]
impl TransactionOperation for InsertUserOperation {
    type Output = User;

    async fn execute(
        &self,
        transaction: &mut Box<dyn TransactionWrapper>,
    ) -> Result<User, TransactionOperationError> {
        let query = format!(
            "INSERT INTO users (name, email) VALUES ($1, $2) RETURNING {}",
            USER_COLUMNS
        );
        let params: Vec<Box<dyn ToSql>> = vec![
            Box::new(self.user.name.clone()) as Box<dyn ToSql>,
            Box::new(self.user.email.clone()) as Box<dyn ToSql>,
        ];
        let records = transaction
            .fetch_all(&query, params)
            .await
            .map_err(|e| write_error(&self.user, e))?;
        single_user(records, || {
            CommandError::DatabaseError("insert returned no row".to_string())
        })
    }
}

pub struct UpdateUserOperation {
    id: i32,
    user: NewUser,
}

impl UpdateUserOperation {
    pub fn new(id: i32, user: NewUser) -> Self {
        Self { id, user }
    }
}

#[async_trait]
impl TransactionOperation for UpdateUserOperation {
    type Output = User;

    async fn execute(
        &self,
        transaction: &mut Box<dyn TransactionWrapper>,
    ) -> Result<User, TransactionOperationError> {
        let query = format!(
            "UPDATE users SET name = $1, email = $2 WHERE id = $3 RETURNING {}",
            USER_COLUMNS
        );
        let params: Vec<Box<dyn ToSql>> = vec![
            Box::new(self.user.name.clone()) as Box<dyn ToSql>,
            Box::new(self.user.email.clone()) as Box<dyn ToSql>,
            Box::new(self.id) as Box<dyn ToSql>,
        ];
        let records = transaction
            .fetch_all(&query, params)
            .await
            .map_err(|e| write_error(&self.user, e))?;
        single_user(records, || CommandError::user_not_found(self.id))
    }
}

pub struct DeleteUserOperation {
    id: i32,
}

impl DeleteUserOperation {
    pub fn new(id: i32) -> Self {
        Self { id }
    }
}

#[async_trait]
impl TransactionOperation for DeleteUserOperation {
    type Output = User;

    async fn execute(
        &self,
        transaction: &mut Box<dyn TransactionWrapper>,
    ) -> Result<User, TransactionOperationError> {
        let query = format!("DELETE FROM users WHERE id = $1 RETURNING {}", USER_COLUMNS);
        let params: Vec<Box<dyn ToSql>> = vec![Box::new(self.id) as Box<dyn ToSql>];
        let records = transaction.fetch_all(&query, params).await?;
        single_user(records, || CommandError::user_not_found(self.id))
    }
}

pub struct InsertMissingUsersOperation {
    users: Vec<NewUser>,
}

impl InsertMissingUsersOperation {
    pub fn new(users: Vec<NewUser>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl TransactionOperation for InsertMissingUsersOperation {
    type Output = Vec<User>;

    async fn execute(
        &self,
        transaction: &mut Box<dyn TransactionWrapper>,
    ) -> Result<Vec<User>, TransactionOperationError> {
        let query = format!(
            "INSERT INTO users (name, email) VALUES ($1, $2) \
             ON CONFLICT (email) DO NOTHING RETURNING {}",
            USER_COLUMNS
        );
        let mut inserted = Vec::new();
        for user in &self.users {
            let params: Vec<Box<dyn ToSql>> = vec![
                Box::new(user.name.clone()) as Box<dyn ToSql>,
                Box::new(user.email.clone()) as Box<dyn ToSql>,
            ];
            let records = transaction.fetch_all(&query, params).await?;
            inserted.extend(users_from_records(&records)?);
        }
        Ok(inserted)
    }
}

#[async_trait]
impl UserCommand for PgUserRepository {
    async fn insert(&self, user: NewUser) -> Result<User, CommandError> {
        self.transaction_manager
            .execute(InsertUserOperation::new(user))
            .await
            .map_err(command_error)
    }

    async fn update(&self, id: i32, user: NewUser) -> Result<User, CommandError> {
        self.transaction_manager
            .execute(UpdateUserOperation::new(id, user))
            .await
            .map_err(command_error)
    }

    async fn delete(&self, id: i32) -> Result<User, CommandError> {
        self.transaction_manager
            .execute(DeleteUserOperation::new(id))
            .await
            .map_err(command_error)
    }

    async fn insert_missing(&self, users: Vec<NewUser>) -> Result<Vec<User>, CommandError> {
        self.transaction_manager
            .execute(InsertMissingUsersOperation::new(users))
            .await
            .map_err(command_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::store::pg::test_support::{FakeTransaction, Outcome};
    use crate::adapter::store::pg::transaction::SqlValue;
    use crate::adapter::store::pg::transaction_manager::run_in_transaction;

    fn row(id: i32, name: &str, email: &str) -> Record {
        Record::new()
            .with("id", SqlValue::Int(id))
            .with("name", SqlValue::Text(name.to_string()))
            .with("email", SqlValue::Text(email.to_string()))
    }

    #[tokio::test]
    async fn insert_returns_the_stored_row() {
        let (transaction, outcome) =
            FakeTransaction::returning(vec![row(3, "Rodri", "rodri@gmail.com")]);
        let operation = InsertUserOperation::new(NewUser::new("Rodri", "rodri@gmail.com"));

        let user = run_in_transaction(Box::new(transaction), &operation)
            .await
            .unwrap();

        assert_eq!(user, NewUser::new("Rodri", "rodri@gmail.com").with_id(3));
        assert_eq!(outcome.get(), Outcome::Committed);
    }

    #[tokio::test]
    async fn unique_violation_on_insert_is_email_taken() {
        let (transaction, outcome) = FakeTransaction::failing(TransactionError::UniqueViolation(
            "users_email_key".to_string(),
        ));
        let operation = InsertUserOperation::new(NewUser::new("Willy", "willy@dev.com"));

        let error = run_in_transaction(Box::new(transaction), &operation)
            .await
            .map_err(command_error)
            .unwrap_err();

        assert!(matches!(error, CommandError::AlreadyExists { .. }));
        assert_eq!(outcome.get(), Outcome::RolledBack);
    }

    #[tokio::test]
    async fn update_without_returned_row_is_not_found() {
        let (transaction, outcome) = FakeTransaction::returning(Vec::new());
        let operation = UpdateUserOperation::new(9, NewUser::new("Ghost", "ghost@dev.com"));

        let error = run_in_transaction(Box::new(transaction), &operation)
            .await
            .map_err(command_error)
            .unwrap_err();

        assert!(matches!(error, CommandError::NotFound { .. }));
        assert_eq!(outcome.get(), Outcome::RolledBack);
    }

    #[tokio::test]
    async fn delete_returns_removed_row() {
        let (transaction, _) = FakeTransaction::returning(vec![row(3, "Rodri", "rodri@gmail.com")]);

        let user = run_in_transaction(Box::new(transaction), &DeleteUserOperation::new(3))
            .await
            .unwrap();

        assert_eq!(user.id, 3);
    }

    #[tokio::test]
    async fn insert_missing_collects_only_returned_rows() {
        let (transaction, outcome) = FakeTransaction::with_results(vec![
            Ok(Vec::new()),
            Ok(vec![row(3, "Ana", "ana@dev.com")]),
        ]);
        let operation = InsertMissingUsersOperation::new(vec![
            NewUser::new("Willy", "willy@dev.com"),
            NewUser::new("Ana", "ana@dev.com"),
        ]);

        let inserted = run_in_transaction(Box::new(transaction), &operation)
            .await
            .unwrap();

        assert_eq!(inserted, vec![NewUser::new("Ana", "ana@dev.com").with_id(3)]);
        assert_eq!(outcome.get(), Outcome::Committed);
    }

    #[test]
    fn infrastructure_failures_become_database_errors() {
        let error = command_error(TransactionManagerError::BeginError("refused".to_string()));

        assert!(matches!(error, CommandError::DatabaseError(_)));
    }
}
