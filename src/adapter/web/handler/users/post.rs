use std::sync::Arc;

use crate::core::domain::entity::user::user::UnvalidatedUserInput;
use crate::core::port::create_user::CreateUserInputBoundary;

use crate::adapter::web::dto::user_web_input::UserWebInput;
use crate::adapter::web::dto::user_web_output::UserWebOutput;
use crate::adapter::web::presenter::create_user::CreateUserPresenter;
use crate::adapter::web::presenter::{missing_output, WebResult};

pub struct CreateUserHandler {
    use_case: Arc<dyn CreateUserInputBoundary>,
}

impl CreateUserHandler {
    pub fn new(use_case: Arc<dyn CreateUserInputBoundary>) -> Self {
        Self { use_case }
    }

    pub async fn create_user(&self, user: UserWebInput) -> WebResult<UserWebOutput> {
        let mut presenter = CreateUserPresenter::new();
        let input = UnvalidatedUserInput::from(user);

        match self.use_case.execute(input, &mut presenter).await {
            Ok(_) => match presenter.output.take() {
                Some(user) => presenter.success(user),
                None => Err(missing_output()),
            },
            Err(error) => Err(presenter.failure(error)),
        }
    }
}
