//! PostgreSQL connection pool management

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions, PgSslMode};
use users_common::{DatabaseConfig, SslMode};

/// Parse the connection URL and apply the configured transport mode
///
/// The configured mode overrides any `sslmode` carried in the URL.
pub fn connect_options(config: &DatabaseConfig) -> Result<PgConnectOptions, sqlx::Error> {
    let options: PgConnectOptions = config.url.parse()?;
    Ok(options.ssl_mode(pg_ssl_mode(config.ssl_mode)))
}

/// Create a new PostgreSQL connection pool
///
/// The pool is lazy: no connection is opened until the first query, so the
/// server starts even when the database is unreachable and each request
/// reports the failure on its own. Sizing is left at the sqlx defaults.
pub fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let options = connect_options(config)?;
    Ok(PgPoolOptions::new()
        .acquire_timeout(config.acquire_timeout())
        .connect_lazy_with(options))
}

fn pg_ssl_mode(mode: SslMode) -> PgSslMode {
    match mode {
        SslMode::Disable => PgSslMode::Disable,
        SslMode::Allow => PgSslMode::Allow,
        SslMode::Prefer => PgSslMode::Prefer,
        SslMode::Require => PgSslMode::Require,
    }
}
