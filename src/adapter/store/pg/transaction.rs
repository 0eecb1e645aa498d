use async_trait::async_trait;
use thiserror::Error;

#[async_trait]
pub trait TransactionWrapper: Send + Sync {
    /// Runs a statement and returns the number of affected rows.
    async fn execute(
        &mut self,
        query: &str,
        params: Vec<Box<dyn ToSql>>,
    ) -> Result<u64, TransactionError>;
    async fn fetch_all(
        &mut self,
        query: &str,
        params: Vec<Box<dyn ToSql>>,
    ) -> Result<Vec<Record>, TransactionError>;
    async fn rollback(self: Box<Self>) -> Result<(), TransactionError>;
    async fn commit(self: Box<Self>) -> Result<(), TransactionError>;
}

pub trait ToSql: Send + Sync + std::fmt::Debug {
    fn as_i32(&self) -> Option<i32> {
        None
    }
    fn as_string(&self) -> Option<String> {
        None
    }
}

impl ToSql for i32 {
    fn as_i32(&self) -> Option<i32> {
        Some(*self)
    }
}

impl ToSql for String {
    fn as_string(&self) -> Option<String> {
        Some(self.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlValue {
    Int(i32),
    BigInt(i64),
    Text(String),
    Null,
}

/// One result row, keyed by column name in select order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    columns: Vec<(String, SqlValue)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, column: impl Into<String>, value: SqlValue) -> Self {
        self.columns.push((column.into(), value));
        self
    }

    fn value(&self, column: &str) -> Result<&SqlValue, TransactionError> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
            .ok_or_else(|| TransactionError::DecodeError(format!("missing column: {}", column)))
    }

    pub fn get_i32(&self, column: &str) -> Result<i32, TransactionError> {
        match self.value(column)? {
            SqlValue::Int(value) => Ok(*value),
            SqlValue::BigInt(value) => i32::try_from(*value).map_err(|_| {
                TransactionError::DecodeError(format!("{} out of range: {}", column, value))
            }),
            other => Err(TransactionError::DecodeError(format!(
                "{} is not an integer: {:?}",
                column, other
            ))),
        }
    }

    pub fn get_string(&self, column: &str) -> Result<String, TransactionError> {
        match self.value(column)? {
            SqlValue::Text(value) => Ok(value.clone()),
            other => Err(TransactionError::DecodeError(format!(
                "{} is not text: {:?}",
                column, other
            ))),
        }
    }
}

#[derive(Debug, Error)]
pub enum TransactionError {
    #[error("Failed to execute query: {0}")]
    ExecutionError(String),
    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),
    #[error("Failed to decode row: {0}")]
    DecodeError(String),
    #[error("Failed to commit transaction: {0}")]
    CommitError(String),
    #[error("Failed to rollback transaction: {0}")]
    RollbackError(String),
    #[error("Parameter binding error: {0}")]
    BindError(String),
}
