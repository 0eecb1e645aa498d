use std::sync::Arc;

use crate::core::domain::query::QueryError;
use crate::core::port::get_user::{GetUserError, GetUserInputBoundary};
use crate::core::port::list_users::ListUsersInputBoundary;

use crate::adapter::web::dto::user_web_output::UserWebOutput;
use crate::adapter::web::handler::users::parse_id;
use crate::adapter::web::presenter::get_user::GetUserPresenter;
use crate::adapter::web::presenter::list_users::ListUsersPresenter;
use crate::adapter::web::presenter::{missing_output, WebResult};

pub struct ListUsersHandler {
    use_case: Arc<dyn ListUsersInputBoundary>,
}

impl ListUsersHandler {
    pub fn new(use_case: Arc<dyn ListUsersInputBoundary>) -> Self {
        Self { use_case }
    }

    pub async fn list_users(&self) -> WebResult<Vec<UserWebOutput>> {
        let mut presenter = ListUsersPresenter::new();

        match self.use_case.execute(&mut presenter).await {
            Ok(_) => match presenter.output.take() {
                Some(users) => presenter.success(users),
                None => Err(missing_output()),
            },
            Err(error) => Err(presenter.failure(error)),
        }
    }
}

pub struct GetUserHandler {
    use_case: Arc<dyn GetUserInputBoundary>,
}

impl GetUserHandler {
    pub fn new(use_case: Arc<dyn GetUserInputBoundary>) -> Self {
        Self { use_case }
    }

    pub async fn get_user(&self, raw_id: &str) -> WebResult<UserWebOutput> {
        let mut presenter = GetUserPresenter::new();
        let Some(id) = parse_id(raw_id) else {
            return Err(presenter.failure(GetUserError::QueryError(
                QueryError::user_not_found(raw_id),
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
