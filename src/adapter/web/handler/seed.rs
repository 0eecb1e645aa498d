use std::sync::Arc;

use crate::core::port::seed_users::SeedUsersInputBoundary;

use crate::adapter::web::dto::user_web_output::SeededUsersWebOutput;
use crate::adapter::web::presenter::seed_users::SeedUsersPresenter;
use crate::adapter::web::presenter::{missing_output, WebResult};

pub struct SeedUsersHandler {
    use_case: Arc<dyn SeedUsersInputBoundary>,
}

impl SeedUsersHandler {
    pub fn new(use_case: Arc<dyn SeedUsersInputBoundary>) -> Self {
        Self { use_case }
    }

    pub async fn seed_users(&self) -> WebResult<SeededUsersWebOutput> {
        let mut presenter = SeedUsersPresenter::new();

        match self.use_case.execute(&mut presenter).await {
            Ok(_) => match presenter.output.take() {
                Some(users) => presenter.success(users),
                None => Err(missing_output()),
            },
            Err(error) => Err(presenter.failure(error)),
        }
    }
}
