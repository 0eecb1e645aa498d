use axum::extract::State;
use std::sync::Arc;

use crate::adapter::web::app_state::AppState;
use crate::adapter::web::dto::user_web_output::SeededUsersWebOutput;
use crate::adapter::web::handler::seed::SeedUsersHandler;
use crate::adapter::web::presenter::WebResult;

pub async fn get(State(state): State<Arc<AppState>>) -> WebResult<SeededUsersWebOutput> {
    let handler = SeedUsersHandler::new(state.seed_users_use_case.clone());
    handler.seed_users().await
}
