use async_trait::async_trait;
use thiserror::Error;

use crate::core::domain::command::CommandError;
use crate::core::domain::entity::user::user::{UnvalidatedUserInput, UserValidationError};
use crate::core::domain::entity::user::User;
use crate::core::port::output::{OutputBoundary, OutputError};

#[async_trait]
pub trait UpdateUserInputBoundary: Send + Sync {
    async fn execute(
        &self,
        id: i32,
        input: UnvalidatedUserInput,
        output_boundary: &mut dyn OutputBoundary<User>,
    ) -> Result<(), UpdateUserError>;
}

#[derive(Debug, Error)]
pub enum UpdateUserError {
    #[error(transparent)]
    ValidationError(#[from] UserValidationError),

    #[error(transparent)]
    CommandError(#[from] CommandError),

    #[error("Failed to process output: {0}")]
    OutputError(#[from] OutputError),
}
