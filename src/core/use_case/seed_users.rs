use async_trait::async_trait;
use std::sync::Arc;

use crate::core::domain::entity::user::{NewUser, User, UserCommand};
use crate::core::port::output::OutputBoundary;
use crate::core::port::seed_users::{SeedUsersError, SeedUsersInputBoundary};

pub fn demo_users() -> Vec<NewUser> {
    vec![
        NewUser::new("Willy", "willy@dev.com"),
        NewUser::new("Ana", "ana@dev.com"),
    ]
}

pub struct SeedUsersUseCase {
    repository: Arc<dyn UserCommand>,
}

impl SeedUsersUseCase {
    pub fn new(repository: Arc<dyn UserCommand>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl SeedUsersInputBoundary for SeedUsersUseCase {
    async fn execute(
        &self,
        output_boundary: &mut dyn OutputBoundary<Vec<User>>,
    ) -> Result<(), SeedUsersError> {
        let inserted = self.repository.insert_missing(demo_users()).await?;
        tracing::info!(count = inserted.len(), "seeded demo users");

        output_boundary.execute(inserted)?;

        Ok(())
    }
}
