use async_trait::async_trait;
use thiserror::Error;

use crate::core::domain::command::CommandError;
use crate::core::domain::entity::user::User;
use crate::core::port::output::{OutputBoundary, OutputError};

#[async_trait]
pub trait DeleteUserInputBoundary: Send + Sync {
    async fn execute(
        &self,
        id: i32,
        output_boundary: &mut dyn OutputBoundary<User>,
    ) -> Result<(), DeleteUserError>;
}

#[derive(Debug, Error)]
pub enum DeleteUserError {
    #[error(transparent)]
    CommandError(#[from] CommandError),

    #[error("Failed to process output: {0}")]
    OutputError(#[from] OutputError),
}
