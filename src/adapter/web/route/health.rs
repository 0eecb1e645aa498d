use axum::Json;

use crate::adapter::web::dto::user_web_output::HealthWebOutput;
use crate::adapter::web::presenter::health::HealthPresenter;

pub async fn get() -> Json<HealthWebOutput> {
    HealthPresenter::alive()
}
