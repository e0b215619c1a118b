//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::types::Json;
use sqlx::{Connection, Error as SqlxError, PgConnection, PgPool, Postgres};
use tracing::{instrument, warn};

use users_core::entities::{User, UserPayload};
use users_core::error::StoreError;
use users_core::traits::{RepoResult, UserRepository};

use crate::models::UserModel;

use super::error::map_db_error;

/// PostgreSQL implementation of UserRepository
///
/// Every method issues a single statement on a connection borrowed from the
/// pool; the connection goes back when it is dropped. Rows are returned whole.
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn acquire(&self) -> RepoResult<PoolConnection<Postgres>> {
        match self.pool.acquire().await {
            Ok(conn) => Ok(conn),
            Err(SqlxError::PoolTimedOut) => Err(self.timeout_cause().await),
            Err(e) => Err(map_db_error(e)),
        }
    }

    /// Open one connection outside the pool to report why the pool could not.
    ///
    /// The pool hides connect failures behind `PoolTimedOut`. When the store
    /// is merely busy the direct connect succeeds and the timeout stands.
    async fn timeout_cause(&self) -> StoreError {
        let options = self.pool.connect_options();
        let limit = self.pool.options().get_acquire_timeout();

        match tokio::time::timeout(limit, PgConnection::connect_with(&options)).await {
            Ok(Err(e)) => {
                warn!(error = %e, "Store unreachable");
                map_db_error(e)
            }
            Ok(Ok(conn)) => {
                let _ = conn.close().await;
                map_db_error(SqlxError::PoolTimedOut)
            }
            Err(_) => map_db_error(SqlxError::PoolTimedOut),
        }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<User>> {
        let mut conn = self.acquire().await?;
        let rows = sqlx::query_scalar::<_, Json<UserModel>>(
            r"
            SELECT to_jsonb(users.*)
            FROM users
            ",
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(|Json(row)| User::from(row)).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<User>> {
        let mut conn = self.acquire().await?;
        let result = sqlx::query_scalar::<_, Json<UserModel>>(
            r"
            SELECT to_jsonb(users.*)
            FROM users
            WHERE id = $1::int8
            ",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(|Json(row)| User::from(row)))
    }

    #[instrument(skip(self))]
    async fn create(&self, payload: &UserPayload) -> RepoResult<User> {
        let mut conn = self.acquire().await?;
        let Json(row) = sqlx::query_scalar::<_, Json<UserModel>>(
            r"
            INSERT INTO users (nombre, correo)
            VALUES ($1, $2)
            RETURNING to_jsonb(users.*)
            ",
        )
        .bind(payload.nombre.as_deref())
        .bind(payload.correo.as_deref())
        .fetch_one(&mut *conn)
        .await
        .map_err(map_db_error)?;

        Ok(User::from(row))
    }

    #[instrument(skip(self))]
    async fn update(&self, id: &str, payload: &UserPayload) -> RepoResult<Option<User>> {
        let mut conn = self.acquire().await?;
        let result = sqlx::query_scalar::<_, Json<UserModel>>(
            r"
            UPDATE users
            SET nombre = $1, correo = $2
            WHERE id = $3::int8
            RETURNING to_jsonb(users.*)
            ",
        )
        .bind(payload.nombre.as_deref())
        .bind(payload.correo.as_deref())
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(|Json(row)| User::from(row)))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &str) -> RepoResult<()> {
        let mut conn = self.acquire().await?;
        sqlx::query(
            r"
            DELETE FROM users
            WHERE id = $1::int8
            ",
        )
        .bind(id)
        .execute(&mut *conn)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn ping(&self) -> RepoResult<()> {
        let mut conn = self.acquire().await?;
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&mut *conn)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }
}
