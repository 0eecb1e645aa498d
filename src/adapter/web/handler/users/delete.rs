use std::sync::Arc;

use crate::core::domain::command::CommandError;
use crate::core::port::delete_user::{DeleteUserError, DeleteUserInputBoundary};

use crate::adapter::web::dto::user_web_output::DeletedUserWebOutput;
use crate::adapter::web::handler::users::parse_id;
use crate::adapter::web::presenter::delete_user::DeleteUserPresenter;
use crate::adapter::web::presenter::{missing_output, WebResult};

pub struct DeleteUserHandler {
    use_case: Arc<dyn DeleteUserInputBoundary>,
}

impl DeleteUserHandler {
    pub fn new(use_case: Arc<dyn DeleteUserInputBoundary>) -> Self {
        Self { use_case }
    }

    pub async fn delete_user(&self, raw_id: &str) -> WebResult<DeletedUserWebOutput> {
        let mut presenter = DeleteUserPresenter::new();
        let Some(id) = parse_id(raw_id) else {
            return Err(presenter.failure(DeleteUserError::CommandError(
                CommandError::user_not_found(raw_id),
            )));
        };

        match self.use_case.execute(id, &mut presenter).await {
            Ok(_) => match presenter.output.take() {
                Some(user) => presenter.success(user),
                None => Err(missing_output()),
            },
            Err(error) => Err(presenter.failure(error)),
        }
    }
}
