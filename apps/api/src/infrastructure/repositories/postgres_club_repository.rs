use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use super::{is_unique_violation, storage_error};
use crate::domain::club::Club;
use crate::domain::errors::DomainError;
use crate::domain::repositories::ClubRepository;

/// PostgreSQL implementation of [`ClubRepository`].
pub struct PostgresClubRepository {
    pool: PgPool,
}

impl PostgresClubRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn club_from_row(row: &PgRow) -> Result<Club, sqlx::Error> {
    Ok(Club {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        active: row.try_get("active")?,
    })
}

#[async_trait]
impl ClubRepository for PostgresClubRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Club>, DomainError> {
        let row = sqlx::query("SELECT id, name, active FROM clubs WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error)?;

        row.map(|r| club_from_row(&r).map_err(storage_error))
            .transpose()
    }

    async fn list_all(&self) -> Result<Vec<Club>, DomainError> {
        let rows = sqlx::query("SELECT id, name, active FROM clubs ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error)?;

        rows.iter()
            .map(|r| club_from_row(r).map_err(storage_error))
            .collect()
    }

    async fn list_active(&self) -> Result<Vec<Club>, DomainError> {
        let rows =
            sqlx::query("SELECT id, name, active FROM clubs WHERE active ORDER BY name")
                .fetch_all(&self.pool)
                .await
                .map_err(storage_error)?;

        rows.iter()
            .map(|r| club_from_row(r).map_err(storage_error))
            .collect()
    }

    async fn insert(&self, name: &str) -> Result<Club, DomainError> {
        let row = sqlx::query(
            "INSERT INTO clubs (name, active) VALUES ($1, TRUE) RETURNING id, name, active",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                DomainError::ClubAlreadyExists(name.to_string())
            } else {
                storage_error(e)
            }
        })?;

        club_from_row(&row).map_err(storage_error)
    }
}
