//! Users API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p users-api
//! ```
//!
//! Configuration is loaded from environment variables or a `.env` file.

use users_common::{try_init_tracing, try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            let _ = try_init_tracing();
            error!(error = %e, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    // Initialize tracing
    if let Err(e) = try_init_tracing_with_config(&TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        env = ?config.app.env,
        port = config.server.port,
        database = ?config.database,
        "Configuration loaded"
    );

    // Run the server
    if let Err(e) = users_api::run(config).await {
        error!(error = %e, code = e.error_code(), "Server failed");
        std::process::exit(1);
    }
}
