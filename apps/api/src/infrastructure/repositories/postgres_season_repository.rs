use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use super::{is_unique_violation, storage_error};
use crate::domain::errors::DomainError;
use crate::domain::repositories::SeasonRepository;
use crate::domain::season::Season;

/// PostgreSQL implementation of [`SeasonRepository`].
pub struct PostgresSeasonRepository {
    pool: PgPool,
}

impl PostgresSeasonRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn season_from_row(row: &PgRow) -> Result<Season, sqlx::Error> {
    Ok(Season {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
    })
}

#[async_trait]
impl SeasonRepository for PostgresSeasonRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Season>, DomainError> {
        let row = sqlx::query("SELECT id, name FROM seasons WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error)?;

        row.map(|r| season_from_row(&r).map_err(storage_error))
            .transpose()
    }

    async fn list_all(&self) -> Result<Vec<Season>, DomainError> {
        let rows = sqlx::query("SELECT id, name FROM seasons ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error)?;

        rows.iter()
            .map(|r| season_from_row(r).map_err(storage_error))
            .collect()
    }

    async fn insert(&self, name: &str) -> Result<Season, DomainError> {
        let row = sqlx::query("INSERT INTO seasons (name) VALUES ($1) RETURNING id, name")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    DomainError::SeasonAlreadyExists(name.to_string())
                } else {
                    storage_error(e)
                }
            })?;

        season_from_row(&row).map_err(storage_error)
    }
}
