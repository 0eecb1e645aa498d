use axum::http::StatusCode;
use axum::Json;

use crate::adapter::web::dto::user_web_output::UserWebOutput;
use crate::adapter::web::presenter::{internal_error, store_once, ErrorResponse, WebResult};
use crate::core::domain::entity::user::User;
use crate::core::port::list_users::ListUsersError;
use crate::core::port::output::{OutputBoundary, OutputError};

pub struct ListUsersPresenter {
    pub(crate) output: Option<Vec<User>>,
}

impl ListUsersPresenter {
    pub fn new() -> Self {
        Self { output: None }
    }

    pub(crate) fn success(&self, output: Vec<User>) -> WebResult<Vec<UserWebOutput>> {
        Ok((
            StatusCode::OK,
            Json(output.into_iter().map(UserWebOutput::from).collect()),
        ))
    }

    pub(crate) fn failure(&self, error: ListUsersError) -> ErrorResponse {
        internal_error(format!("Failed to fetch users: {}", error))
    }
}

impl OutputBoundary<Vec<User>> for ListUsersPresenter {
    fn execute(&mut self, output: Vec<User>) -> Result<(), OutputError> {
        store_once(&mut self.output, output)
    }
}
