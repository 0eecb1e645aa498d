pub mod command;
pub mod query;
pub mod schema;
pub mod sqlx_transaction;
pub mod transaction;
pub mod transaction_manager;
pub mod transaction_operation;

#[cfg(test)]
pub(crate) mod test_support;

use crate::adapter::store::pg::transaction::{Record, TransactionError};
use crate::core::domain::entity::user::User;

pub(crate) const USER_COLUMNS: &str = "id, name, email";

impl TryFrom<&Record> for User {
    type Error = TransactionError;

    fn try_from(record: &Record) -> Result<Self, Self::Error> {
        Ok(User {
            id: record.get_i32("id")?,
            name: record.get_string("name")?,
            email: record.get_string("email")?,
        })
    }
}

pub(crate) fn users_from_records(records: &[Record]) -> Result<Vec<User>, TransactionError> {
    records.iter().map(User::try_from).collect()
}
