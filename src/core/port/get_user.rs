use async_trait::async_trait;
use thiserror::Error;

use crate::core::domain::entity::user::User;
use crate::core::domain::query::QueryError;
use crate::core::port::output::{OutputBoundary, OutputError};

#[async_trait]
pub trait GetUserInputBoundary: Send + Sync {
    async fn execute(
        &self,
        id: i32,
        output_boundary: &mut dyn OutputBoundary<User>,
    ) -> Result<(), GetUserError>;
}

#[derive(Debug, Error)]
pub enum GetUserError {
    #[error(transparent)]
    QueryError(#[from] QueryError),

    #[error("Failed to process output: {0}")]
    OutputError(#[from] OutputError),
}
