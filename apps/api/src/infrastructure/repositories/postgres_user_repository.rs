use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use super::{is_unique_violation, storage_error};
use crate::domain::errors::DomainError;
use crate::domain::repositories::UserRepository;
use crate::domain::user::User;

/// PostgreSQL implementation of [`UserRepository`]. Users are keyed by
/// username, no surrogate id.
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn user_from_row(row: &PgRow) -> Result<User, sqlx::Error> {
    Ok(User {
        username: row.try_get("username")?,
        password_hash: row.try_get("password_hash")?,
        enabled: row.try_get("enabled")?,
    })
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError> {
        let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)")
            .bind(username)
            .fetch_one(&self.pool)
            .await
            .map_err(storage_error)?;

        row.try_get(0).map_err(storage_error)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(
            "SELECT username, password_hash, enabled FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error)?;

        row.map(|r| user_from_row(&r).map_err(storage_error))
            .transpose()
    }

    async fn insert(&self, user: User) -> Result<(), DomainError> {
        sqlx::query("INSERT INTO users (username, password_hash, enabled) VALUES ($1, $2, $3)")
            .bind(&user.username)
            .bind(&user.password_hash)
            .bind(user.enabled)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    DomainError::UserAlreadyExists(user.username.clone())
                } else {
                    storage_error(e)
                }
            })?;

        Ok(())
    }

    async fn update_password(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<(), DomainError> {
        let result = sqlx::query("UPDATE users SET password_hash = $2 WHERE username = $1")
            .bind(username)
            .bind(password_hash)
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::UserNotFound(username.to_string()));
        }
        Ok(())
    }
}
