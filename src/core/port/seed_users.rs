use async_trait::async_trait;
use thiserror::Error;

use crate::core::domain::command::CommandError;
use crate::core::domain::entity::user::User;
use crate::core::port::output::{OutputBoundary, OutputError};

/// Loads the demo users. Users whose email is already stored are skipped.
#[async_trait]
pub trait SeedUsersInputBoundary: Send + Sync {
    async fn execute(
        &self,
        output_boundary: &mut dyn OutputBoundary<Vec<User>>,
    ) -> Result<(), SeedUsersError>;
}

#[derive(Debug, Error)]
pub enum SeedUsersError {
    #[error(transparent)]
    CommandError(#[from] CommandError),

    #[error("Failed to process output: {0}")]
    OutputError(#[from] OutputError),
}
