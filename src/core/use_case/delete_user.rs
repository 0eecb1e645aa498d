use async_trait::async_trait;
use std::sync::Arc;

use crate::core::domain::entity::user::{User, UserCommand};
use crate::core::port::delete_user::{DeleteUserError, DeleteUserInputBoundary};
use crate::core::port::output::OutputBoundary;

pub struct DeleteUserUseCase {
    repository: Arc<dyn UserCommand>,
}

impl DeleteUserUseCase {
    pub fn new(repository: Arc<dyn UserCommand>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl DeleteUserInputBoundary for DeleteUserUseCase {
    async fn execute(
        &self,
        id: i32,
        output_boundary: &mut dyn OutputBoundary<User>,
    ) -> Result<(), DeleteUserError> {
        let deleted = self.repository.delete(id).await?;
        tracing::debug!(id, "user deleted");

        output_boundary.execute(deleted)?;

        Ok(())
    }
}
