use axum::Json;

use crate::adapter::web::dto::user_web_output::HealthWebOutput;

pub struct HealthPresenter;

impl HealthPresenter {
    pub(crate) fn alive() -> Json<HealthWebOutput> {
        Json(HealthWebOutput {
            status: "ok".to_string(),
            message: "User service is alive".to_string(),
        })
    }
}
