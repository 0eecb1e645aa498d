use std::sync::Arc;

use crate::core::domain::command::CommandError;
use crate::core::domain::entity::user::user::UnvalidatedUserInput;
use crate::core::port::update_user::{UpdateUserError, UpdateUserInputBoundary};

use crate::adapter::web::dto::user_web_input::UserWebInput;
use crate::adapter::web::dto::user_web_output::UserWebOutput;
use crate::adapter::web::handler::users::parse_id;
use crate::adapter::web::presenter::update_user::UpdateUserPresenter;
use crate::adapter::web::presenter::{missing_output, WebResult};

pub struct UpdateUserHandler {
    use_case: Arc<dyn UpdateUserInputBoundary>,
}

impl UpdateUserHandler {
    pub fn new(use_case: Arc<dyn UpdateUserInputBoundary>) -> Self {
        Self { use_case }
    }

    pub async fn update_user(&self, raw_id: &str, user: UserWebInput) -> WebResult<UserWebOutput> {
        let mut presenter = UpdateUserPresenter::new();
        let Some(id) = parse_id(raw_id) else {
            return Err(presenter.failure(UpdateUserError::CommandError(
                CommandError::user_not_found(raw_id),
            )));
        };
        let input = UnvalidatedUserInput::from(user);

        match self.use_case.execute(id, input, &mut presenter).await {
            Ok(_) => match presenter.output.take() {
                Some(user) => presenter.success(user),
                None => Err(missing_output()),
            },
            Err(error) => Err(presenter.failure(error)),
        }
    }
}
