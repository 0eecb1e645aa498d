use axum::http::StatusCode;
use axum::Json;

use crate::adapter::web::dto::user_web_output::{SeededUsersWebOutput, UserWebOutput};
use crate::adapter::web::presenter::{internal_error, store_once, ErrorResponse, WebResult};
use crate::core::domain::entity::user::User;
use crate::core::port::output::{OutputBoundary, OutputError};
use crate::core::port::seed_users::SeedUsersError;

pub struct SeedUsersPresenter {
    pub(crate) output: Option<Vec<User>>,
}

impl SeedUsersPresenter {
    pub fn new() -> Self {
        Self { output: None }
    }

    pub(crate) fn success(&self, output: Vec<User>) -> WebResult<SeededUsersWebOutput> {
        Ok((
            StatusCode::OK,
            Json(SeededUsersWebOutput {
                message: format!("Seeded {} users", output.len()),
                users: output.into_iter().map(UserWebOutput::from).collect(),
            }),
        ))
    }

    pub(crate) fn failure(&self, error: SeedUsersError) -> ErrorResponse {
        internal_error(format!("Failed to seed users: {}", error))
    }
}

impl OutputBoundary<Vec<User>> for SeedUsersPresenter {
    fn execute(&mut self, output: Vec<User>) -> Result<(), OutputError> {
        store_once(&mut self.output, output)
    }
}
