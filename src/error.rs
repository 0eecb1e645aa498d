use thiserror::Error;

use crate::adapter::config::ConfigError;
use crate::adapter::init::AppInitializerError;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    ConfigurationError(#[from] ConfigError),
    #[error(transparent)]
    InitializationError(#[from] AppInitializerError),
    #[error("Failed to start server: {0}")]
    ServerError(#[from] std::io::Error),
}
