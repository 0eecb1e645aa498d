mod adapter;
mod core;
mod error;

use tokio::net::TcpListener;
use tokio::signal;

use crate::adapter::config::AppConfig;
use crate::adapter::init::AppInitializer;
use crate::adapter::observability::init_tracing;
use crate::adapter::web::create_router::create_router;
use crate::error::ApplicationError;

#[tokio::main]
async fn main() -> Result<(), ApplicationError> {
    let config = AppConfig::load()?;
    init_tracing(&config);

    let state = AppInitializer::initialize(&config).await?;
    let app = create_router(state);

    let listener = TcpListener::bind(config.bind_target()).await?;
    tracing::info!("Server running at http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
