use axum::http::StatusCode;
use axum::Json;

use crate::adapter::web::dto::user_web_output::UserWebOutput;
use crate::adapter::web::presenter::{
    bad_request, internal_error, store_once, ErrorResponse, WebResult,
};
use crate::core::domain::entity::user::User;
use crate::core::port::output::{OutputBoundary, OutputError};
use crate::core::port::update_user::UpdateUserError;

pub struct UpdateUserPresenter {
    pub(crate) output: Option<User>,
}

impl UpdateUserPresenter {
    pub fn new() -> Self {
        Self { output: None }
    }

    pub(crate) fn success(&self, output: User) -> WebResult<UserWebOutput> {
        Ok((StatusCode::OK, Json(output.into())))
    }

    pub(crate) fn failure(&self, error: UpdateUserError) -> ErrorResponse {
        match error {
            UpdateUserError::ValidationError(e) => bad_request(e.to_string()),
            other => internal_error(format!("Failed to update user: {}", other)),
        }
    }
}

impl OutputBoundary<User> for UpdateUserPresenter {
    fn execute(&mut self, output: User) -> Result<(), OutputError> {
        store_once(&mut self.output, output)
    }
}
