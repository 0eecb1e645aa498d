use async_trait::async_trait;
use std::sync::Arc;

use crate::core::domain::entity::user::{User, UserQuery};
use crate::core::port::get_user::{GetUserError, GetUserInputBoundary};
use crate::core::port::output::OutputBoundary;

pub struct GetUserUseCase {
    repository: Arc<dyn UserQuery>,
}

impl GetUserUseCase {
    pub fn new(repository: Arc<dyn UserQuery>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl GetUserInputBoundary for GetUserUseCase {
    async fn execute(
        &self,
        id: i32,
        output_boundary: &mut dyn OutputBoundary<User>,
    ) -> Result<(), GetUserError> {
        let user = self.repository.find_by_id(id).await?;
        output_boundary.execute(user)?;
        Ok(())
    }
}
