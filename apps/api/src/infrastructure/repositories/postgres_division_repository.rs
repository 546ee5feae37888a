use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use super::storage_error;
use crate::domain::division::Division;
use crate::domain::errors::DomainError;
use crate::domain::repositories::DivisionRepository;
use crate::domain::season::Season;

/// PostgreSQL implementation of [`DivisionRepository`].
///
/// Reads join the owning season in, so the domain never sees a dangling
/// season reference.
pub struct PostgresDivisionRepository {
    pool: PgPool,
}

impl PostgresDivisionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT_DIVISION: &str = "\
    SELECT d.id AS id, d.name AS name, d.level AS level, \
           s.id AS season_id, s.name AS season_name \
    FROM divisions d \
    JOIN seasons s ON s.id = d.season_id";

fn division_from_row(row: &PgRow) -> Result<Division, sqlx::Error> {
    Ok(Division {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        level: row.try_get("level")?,
        season: Season {
            id: row.try_get("season_id")?,
            name: row.try_get("season_name")?,
        },
    })
}

#[async_trait]
impl DivisionRepository for PostgresDivisionRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Division>, DomainError> {
        let row = sqlx::query(&format!("{SELECT_DIVISION} WHERE d.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error)?;

        row.map(|r| division_from_row(&r).map_err(storage_error))
            .transpose()
    }

    async fn find_by_season_name(&self, season_name: &str) -> Result<Vec<Division>, DomainError> {
        let rows = sqlx::query(&format!("{SELECT_DIVISION} WHERE s.name = $1"))
            .bind(season_name)
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error)?;

        rows.iter()
            .map(|r| division_from_row(r).map_err(storage_error))
            .collect()
    }

    async fn insert(
        &self,
        name: &str,
        level: i32,
        season: &Season,
    ) -> Result<Division, DomainError> {
        let row = sqlx::query(
            "INSERT INTO divisions (name, level, season_id) VALUES ($1, $2, $3) \
             RETURNING id, name, level",
        )
        .bind(name)
        .bind(level)
        .bind(season.id)
        .fetch_one(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(Division {
            id: row.try_get("id").map_err(storage_error)?,
            name: row.try_get("name").map_err(storage_error)?,
            level: row.try_get("level").map_err(storage_error)?,
            season: season.clone(),
        })
    }
}
