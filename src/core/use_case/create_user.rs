use async_trait::async_trait;
use std::sync::Arc;

use crate::core::domain::entity::user::user::UnvalidatedUserInput;
use crate::core::domain::entity::user::{NewUser, User, UserCommand};
use crate::core::port::create_user::{CreateUserError, CreateUserInputBoundary};
use crate::core::port::output::OutputBoundary;

pub struct CreateUserUseCase {
    repository: Arc<dyn UserCommand>,
}

impl CreateUserUseCase {
    pub fn new(repository: Arc<dyn UserCommand>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CreateUserInputBoundary for CreateUserUseCase {
    async fn execute(
        &self,
        input: UnvalidatedUserInput,
        output_boundary: &mut dyn OutputBoundary<User>,
    ) -> Result<(), CreateUserError> {
        let user = NewUser::try_from(input)?;
        let created = self.repository.insert(user).await?;
        tracing::debug!(id = created.id, "user created");

        output_boundary.execute(created)?;

        Ok(())
    }
}
