//! Server setup and initialization
//!
//! Provides the application builder and server runner.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info, warn};
use users_common::{AppConfig, AppError, ServerConfig};
use users_db::{create_pool, PgUserRepository};

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router();
    let router = apply_middleware(router);
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
///
/// The pool connects lazily, so this does not touch the database.
pub fn create_app_state(config: &AppConfig) -> Result<AppState, AppError> {
    let pool = create_pool(&config.database).map_err(AppError::database)?;
    info!(ssl_mode = ?config.database.ssl_mode, "PostgreSQL pool created");

    let users = Arc::new(PgUserRepository::new(pool));

    Ok(AppState::new(users, config.app.clone()))
}

/// Bind the listener for `HOST`/`PORT`
///
/// `HOST` may be an IP literal or a name such as `localhost`.
pub async fn bind_listener(config: &ServerConfig) -> Result<TcpListener, AppError> {
    TcpListener::bind((config.host.as_str(), config.port))
        .await
        .map_err(|e| AppError::server(format!("Failed to bind to {}: {e}", config.address())))
}

/// Run the HTTP server until a shutdown signal arrives
pub async fn run_server(app: Router, listener: TcpListener) -> Result<(), AppError> {
    let addr = listener.local_addr().map_err(AppError::server)?;
    info!("API running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::server)?;

    info!("Server shutdown complete");
    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", config.server.address());
    let listener = bind_listener(&config.server).await?;

    // Create app state
    let state = create_app_state(&config)?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, listener).await
}

/// Resolve on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            warn!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            warn!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
