use async_trait::async_trait;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::Query;
use sqlx::{Column, Postgres, Row, Transaction, TypeInfo};

use crate::adapter::store::pg::transaction::{
    Record, SqlValue, ToSql, TransactionError, TransactionWrapper,
};

pub struct SqlxTransaction<'t> {
    transaction: Transaction<'t, Postgres>,
}

impl<'a> SqlxTransaction<'a> {
    pub fn new(transaction: Transaction<'a, Postgres>) -> Self {
        Self { transaction }
    }
}

fn bind<'q>(
    query: &'q str,
    params: Vec<Box<dyn ToSql>>,
) -> Result<Query<'q, Postgres, PgArguments>, TransactionError> {
    let mut sqlx_query = sqlx::query(query);

    for param in params {
        if let Some(value) = param.as_i32() {
            sqlx_query = sqlx_query.bind(value);
        } else if let Some(value) = param.as_string() {
            sqlx_query = sqlx_query.bind(value);
        } else {
            return Err(TransactionError::BindError(format!(
                "Unsupported parameter type: {:?}",
                param
            )));
        }
    }

    Ok(sqlx_query)
}

fn execution_error(query: &str, error: sqlx::Error) -> TransactionError {
    if let Some(db_error) = error.as_database_error() {
        if db_error.is_unique_violation() {
            return TransactionError::UniqueViolation(db_error.message().to_string());
        }
    }
    TransactionError::ExecutionError(format!(
        "Failed to execute query: {:?}, error: {:?}",
        query, error
    ))
}

fn decode(row: &PgRow) -> Result<Record, TransactionError> {
    let mut record = Record::new();

    for column in row.columns() {
        let index = column.ordinal();
        let value = match column.type_info().name() {
            "INT4" => row
                .try_get::<Option<i32>, _>(index)
                .map(|value| value.map_or(SqlValue::Null, SqlValue::Int)),
            "INT8" => row
                .try_get::<Option<i64>, _>(index)
                .map(|value| value.map_or(SqlValue::Null, SqlValue::BigInt)),
            "TEXT" | "VARCHAR" | "BPCHAR" | "NAME" => row
                .try_get::<Option<String>, _>(index)
                .map(|value| value.map_or(SqlValue::Null, SqlValue::Text)),
            other => {
                return Err(TransactionError::DecodeError(format!(
                    "Unsupported column type {} for {}",
                    other,
                    column.name()
                )))
            }
        }
        .map_err(|e| TransactionError::DecodeError(e.to_string()))?;
        record = record.with(column.name(), value);
    }

    Ok(record)
}

#[async_trait]
impl<'t> TransactionWrapper for SqlxTransaction<'t> {
    async fn execute(
        &mut self,
        query: &str,
        params: Vec<Box<dyn ToSql>>,
    ) -> Result<u64, TransactionError> {
        let result = bind(query, params)?
            .execute(&mut *self.transaction)
            .await
            .map_err(|e| execution_error(query, e))?;
        Ok(result.rows_affected())
    }

    async fn fetch_all(
        &mut self,
        query: &str,
        params: Vec<Box<dyn ToSql>>,
    ) -> Result<Vec<Record>, TransactionError> {
        let rows = bind(query, params)?
            .fetch_all(&mut *self.transaction)
            .await
            .map_err(|e| execution_error(query, e))?;
        rows.iter().map(decode).collect()
    }

    async fn rollback(self: Box<Self>) -> Result<(), TransactionError> {
        self.transaction
            .rollback()
            .await
            .map_err(|e| TransactionError::RollbackError(e.to_string()))
    }

    async fn commit(self: Box<Self>) -> Result<(), TransactionError> {
        self.transaction.commit().await.map_err(|e| {
            TransactionError::CommitError(format!("Failed to commit transaction: {:?}", e))
        })
    }
}
