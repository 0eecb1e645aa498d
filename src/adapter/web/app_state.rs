use std::sync::Arc;

use crate::core::domain::entity::user::{UserCommand, UserQuery};
use crate::core::port::create_user::CreateUserInputBoundary;
use crate::core::port::delete_user::DeleteUserInputBoundary;
use crate::core::port::get_user::GetUserInputBoundary;
use crate::core::port::list_users::ListUsersInputBoundary;
use crate::core::port::seed_users::SeedUsersInputBoundary;
use crate::core::port::update_user::UpdateUserInputBoundary;
use crate::core::use_case::create_user::CreateUserUseCase;
use crate::core::use_case::delete_user::DeleteUserUseCase;
use crate::core::use_case::get_user::GetUserUseCase;
use crate::core::use_case::list_users::ListUsersUseCase;
use crate::core::use_case::seed_users::SeedUsersUseCase;
use crate::core::use_case::update_user::UpdateUserUseCase;

pub struct AppState {
    pub list_users_use_case: Arc<dyn ListUsersInputBoundary>,
    pub get_user_use_case: Arc<dyn GetUserInputBoundary>,
    pub create_user_use_case: Arc<dyn CreateUserInputBoundary>,
    pub update_user_use_case: Arc<dyn UpdateUserInputBoundary>,
    pub delete_user_use_case: Arc<dyn DeleteUserInputBoundary>,
    pub seed_users_use_case: Arc<dyn SeedUsersInputBoundary>,
}

impl AppState {
    /// Wires every use case to the same store.
    pub fn new(command: Arc<dyn UserCommand>, query: Arc<dyn UserQuery>) -> Self {
        Self {
            list_users_use_case: Arc::new(ListUsersUseCase::new(query.clone())),
            get_user_use_case: Arc::new(GetUserUseCase::new(query)),
            create_user_use_case: Arc::new(CreateUserUseCase::new(command.clone())),
            update_user_use_case: Arc::new(UpdateUserUseCase::new(command.clone())),
            delete_user_use_case: Arc::new(DeleteUserUseCase::new(command.clone())),
            seed_users_use_case: Arc::new(SeedUsersUseCase::new(command)),
        }
    }
}
