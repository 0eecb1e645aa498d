use axum::http::StatusCode;
use axum::Json;

use crate::adapter::web::dto::user_web_output::DeletedUserWebOutput;
use crate::adapter::web::presenter::{internal_error, store_once, ErrorResponse, WebResult};
use crate::core::domain::entity::user::User;
use crate::core::port::delete_user::DeleteUserError;
use crate::core::port::output::{OutputBoundary, OutputError};

pub struct DeleteUserPresenter {
    pub(crate) output: Option<User>,
}

impl DeleteUserPresenter {
    pub fn new() -> Self {
        Self { output: None }
    }

    pub(crate) fn success(&self, output: User) -> WebResult<DeletedUserWebOutput> {
        Ok((
            StatusCode::OK,
            Json(DeletedUserWebOutput {
                message: "User deleted successfully".to_string(),
                user: output.into(),
            }),
        ))
    }

    pub(crate) fn failure(&self, error: DeleteUserError) -> ErrorResponse {
        internal_error(format!("Failed to delete user: {}", error))
    }
}

impl OutputBoundary<User> for DeleteUserPresenter {
    fn execute(&mut self, output: User) -> Result<(), OutputError> {
        store_once(&mut self.output, output)
    }
}
