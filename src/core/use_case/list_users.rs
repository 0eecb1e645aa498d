use async_trait::async_trait;
use std::sync::Arc;

use crate::core::domain::entity::user::{User, UserQuery};
use crate::core::port::list_users::{ListUsersError, ListUsersInputBoundary};
use crate::core::port::output::OutputBoundary;

pub struct ListUsersUseCase {
    repository: Arc<dyn UserQuery>,
}

impl ListUsersUseCase {
    pub fn new(repository: Arc<dyn UserQuery>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ListUsersInputBoundary for ListUsersUseCase {
    async fn execute(
        &self,
        output_boundary: &mut dyn OutputBoundary<Vec<User>>,
    ) -> Result<(), ListUsersError> {
        let users = self.repository.find_all().await?;
        output_boundary.execute(users)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::store::memory::user::InMemoryUserRepository;
    use crate::core::domain::entity::user::NewUser;
    use crate::core::use_case::test_support::RecordingOutput;

    #[tokio::test]
    async fn preserves_store_order() {
        let repository = Arc::new(InMemoryUserRepository::with_users(vec![
            NewUser::new("Willy", "willy@dev.com"),
            NewUser::new("Ana", "ana@dev.com"),
        ]));
        let use_case = ListUsersUseCase::new(repository);
        let mut output = RecordingOutput::<Vec<User>>::default();

        use_case.execute(&mut output).await.unwrap();

        let names: Vec<String> = output
            .output
            .unwrap()
            .into_iter()
            .map(|user| user.name)
            .collect();
        assert_eq!(names, vec!["Willy", "Ana"]);
    }
}
