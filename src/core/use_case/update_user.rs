use async_trait::async_trait;
use std::sync::Arc;

use crate::core::domain::entity::user::user::UnvalidatedUserInput;
use crate::core::domain::entity::user::{NewUser, User, UserCommand};
use crate::core::port::output::OutputBoundary;
use crate::core::port::update_user::{UpdateUserError, UpdateUserInputBoundary};

pub struct UpdateUserUseCase {
    repository: Arc<dyn UserCommand>,
}

impl UpdateUserUseCase {
    pub fn new(repository: Arc<dyn UserCommand>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UpdateUserInputBoundary for UpdateUserUseCase {
    async fn execute(
        &self,
        id: i32,
        input: UnvalidatedUserInput,
        output_boundary: &mut dyn OutputBoundary<User>,
    ) -> Result<(), UpdateUserError> {
        let user = NewUser::try_from(input)?;
        let updated = self.repository.update(id, user).await?;
        tracing::debug!(id, "user updated");

        output_boundary.execute(updated)?;

        Ok(())
    }
}
