use axum::extract::{Path, State};
use axum::Json;
use axum_extra::extract::WithRejection;
use std::sync::Arc;

use crate::adapter::web::app_state::AppState;
use crate::adapter::web::dto::user_web_input::UserWebInput;
use crate::adapter::web::dto::user_web_output::{DeletedUserWebOutput, UserWebOutput};
use crate::adapter::web::handler::users::delete::DeleteUserHandler;
use crate::adapter::web::handler::users::get::{GetUserHandler, ListUsersHandler};
use crate::adapter::web::handler::users::post::CreateUserHandler;
use crate::adapter::web::handler::users::put::UpdateUserHandler;
use crate::adapter::web::presenter::{BodyRejection, WebResult};

pub async fn get_all(State(state): State<Arc<AppState>>) -> WebResult<Vec<UserWebOutput>> {
    let handler = ListUsersHandler::new(state.list_users_use_case.clone());
    handler.list_users().await
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> WebResult<UserWebOutput> {
    let handler = GetUserHandler::new(state.get_user_use_case.clone());
    handler.get_user(&id).await
}

pub async fn post(
    State(state): State<Arc<AppState>>,
    WithRejection(Json(user), _): WithRejection<Json<UserWebInput>, BodyRejection>,
) -> WebResult<UserWebOutput> {
    let handler = CreateUserHandler::new(state.create_user_use_case.clone());
    handler.create_user(user).await
}

pub async fn put(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    WithRejection(Json(user), _): WithRejection<Json<UserWebInput>, BodyRejection>,
) -> WebResult<UserWebOutput> {
    let handler = UpdateUserHandler::new(state.update_user_use_case.clone());
    handler.update_user(&id, user).await
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> WebResult<DeletedUserWebOutput> {
    let handler = DeleteUserHandler::new(state.delete_user_use_case.clone());
    handler.delete_user(&id).await
}
