use async_trait::async_trait;
use thiserror::Error;

use crate::core::domain::entity::user::User;
use crate::core::domain::query::QueryError;
use crate::core::port::output::{OutputBoundary, OutputError};

#[async_trait]
pub trait ListUsersInputBoundary: Send + Sync {
    async fn execute(
        &self,
        output_boundary: &mut dyn OutputBoundary<Vec<User>>,
    ) -> Result<(), ListUsersError>;
}

#[derive(Debug, Error)]
pub enum ListUsersError {
    #[error(transparent)]
    QueryError(#[from] QueryError),

    #[error("Failed to process output: {0}")]
    OutputError(#[from] OutputError),
}
