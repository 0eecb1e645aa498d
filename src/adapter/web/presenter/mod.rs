pub mod create_user;
pub mod delete_user;
pub mod get_user;
pub mod health;
pub mod list_users;
pub mod seed_users;
pub mod update_user;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::adapter::web::dto::user_web_output::ErrorWebOutput;
use crate::core::port::output::OutputError;

pub type ErrorResponse = (StatusCode, Json<ErrorWebOutput>);

pub type WebResult<T> = Result<(StatusCode, Json<T>), ErrorResponse>;

pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> ErrorResponse {
    (
        status,
        Json(ErrorWebOutput {
            error: message.into(),
        }),
    )
}

/// Collaborator failures all surface as 500 with the error text.
pub(crate) fn internal_error(message: impl Into<String>) -> ErrorResponse {
    let message = message.into();
    tracing::error!(error = %message, "request failed");
    error_response(StatusCode::INTERNAL_SERVER_ERROR, message)
}

pub(crate) fn bad_request(message: impl Into<String>) -> ErrorResponse {
    let message = message.into();
    tracing::warn!(error = %message, "rejected request");
    error_response(StatusCode::BAD_REQUEST, message)
}

/// A request body axum could not decode, rendered as `ErrorWebOutput`.
pub struct BodyRejection(ErrorResponse);

impl From<JsonRejection> for BodyRejection {
    fn from(rejection: JsonRejection) -> Self {
        let message = rejection.body_text();
        tracing::warn!(error = %message, "rejected request body");
        Self(error_response(rejection.status(), message))
    }
}

impl IntoResponse for BodyRejection {
    fn into_response(self) -> Response {
        self.0.into_response()
    }
}

pub(crate) fn missing_output() -> ErrorResponse {
    internal_error("Output not set by presenter")
}

/// Stores a use case result, refusing a second one.
pub(crate) fn store_once<T>(slot: &mut Option<T>, output: T) -> Result<(), OutputError> {
    if slot.is_some() {
        return Err(OutputError::InvalidStateError(
            "output already set".to_string(),
        ));
    }
    *slot = Some(output);
    Ok(())
}
