use axum::http::StatusCode;
use axum::Json;

use crate::adapter::web::dto::user_web_output::UserWebOutput;
use crate::adapter::web::presenter::{internal_error, store_once, ErrorResponse, WebResult};
use crate::core::domain::entity::user::User;
use crate::core::port::get_user::GetUserError;
use crate::core::port::output::{OutputBoundary, OutputError};

pub struct GetUserPresenter {
    pub(crate) output: Option<User>,
}

impl GetUserPresenter {
    pub fn new() -> Self {
        Self { output: None }
    }

    pub(crate) fn success(&self, output: User) -> WebResult<UserWebOutput> {
        Ok((StatusCode::OK, Json(output.into())))
    }

    pub(crate) fn failure(&self, error: GetUserError) -> ErrorResponse {
        internal_error(format!("Failed to fetch user: {}", error))
    }
}

impl OutputBoundary<User> for GetUserPresenter {
    fn execute(&mut self, output: User) -> Result<(), OutputError> {
        store_once(&mut self.output, output)
    }
}
