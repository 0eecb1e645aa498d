use sqlx::PgPool;
use std::sync::Arc;
use thiserror::Error;

use crate::adapter::config::{AppConfig, ConfigError, StoreKind};
use crate::adapter::store::memory::user::InMemoryUserRepository;
use crate::adapter::store::pg::command::user::PgUserRepository;
use crate::adapter::store::pg::schema::ensure_schema;
use crate::adapter::store::pg::transaction_manager::PgTransactionManager;
use crate::adapter::web::app_state::AppState;
use crate::core::domain::entity::user::{UserCommand, UserQuery};
use crate::core::use_case::seed_users::demo_users;

fn store_pair<R>(repository: Arc<R>) -> (Arc<dyn UserCommand>, Arc<dyn UserQuery>)
where
    R: UserCommand + UserQuery + 'static,
{
    (repository.clone(), repository)
}

pub struct AppInitializer;

impl AppInitializer {
    pub async fn initialize(config: &AppConfig) -> Result<Arc<AppState>, AppInitializerError> {
        let (command, query): (Arc<dyn UserCommand>, Arc<dyn UserQuery>) = match config.store {
            StoreKind::Memory => {
                tracing::info!("using in-memory user store");
                store_pair(Arc::new(InMemoryUserRepository::new()))
            }
            StoreKind::Postgres => {
                tracing::info!("using postgres user store");
                let pool = PgPool::connect(config.db_url()?)
                    .await
                    .map_err(|e| AppInitializerError::DatabaseInitError(e.to_string()))?;
                let transaction_manager = Arc::new(PgTransactionManager::new(pool));
                ensure_schema(&transaction_manager)
                    .await
                    .map_err(|e| AppInitializerError::DatabaseInitError(e.to_string()))?;
                store_pair(Arc::new(PgUserRepository::new(transaction_manager)))
            }
        };

        if config.seed {
            let inserted = command
                .insert_missing(demo_users())
                .await
                .map_err(|e| AppInitializerError::SeedError(e.to_string()))?;
            tracing::info!(count = inserted.len(), "seeded demo users at startup");
        }

        Ok(Arc::new(AppState::new(command, query)))
    }
}

#[derive(Debug, Error)]
pub enum AppInitializerError {
    #[error("Failed to initialize database: {0}")]
    DatabaseInitError(String),
    #[error("Failed to seed users: {0}")]
    SeedError(String),
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
}
