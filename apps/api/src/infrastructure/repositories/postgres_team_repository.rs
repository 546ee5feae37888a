use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use super::{is_unique_violation, storage_error};
use crate::domain::club::Club;
use crate::domain::division::Division;
use crate::domain::errors::DomainError;
use crate::domain::repositories::TeamRepository;
use crate::domain::season::Season;
use crate::domain::team::{Placement, Team};

/// PostgreSQL implementation of [`TeamRepository`].
///
/// The schema carries a partial unique index on (club_id, number) for rows
/// with no division — the backstop behind the registry's best-effort
/// pre-check. Its violation surfaces as `TeamAlreadyExists`, the same
/// condition the pre-check produces.
pub struct PostgresTeamRepository {
    pool: PgPool,
}

impl PostgresTeamRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT_TEAM: &str = "\
    SELECT t.id AS id, t.number AS number, \
           c.id AS club_id, c.name AS club_name, c.active AS club_active, \
           d.id AS division_id, d.name AS division_name, d.level AS division_level, \
           s.id AS season_id, s.name AS season_name \
    FROM teams t \
    JOIN clubs c ON c.id = t.club_id \
    LEFT JOIN divisions d ON d.id = t.division_id \
    LEFT JOIN seasons s ON s.id = d.season_id";

fn team_from_row(row: &PgRow) -> Result<Team, sqlx::Error> {
    let division_id: Option<i64> = row.try_get("division_id")?;
    let placement = match division_id {
        None => Placement::Available,
        Some(id) => Placement::Placed(Division {
            id,
            name: row.try_get("division_name")?,
            level: row.try_get("division_level")?,
            season: Season {
                id: row.try_get("season_id")?,
                name: row.try_get("season_name")?,
            },
        }),
    };

    Ok(Team {
        id: row.try_get("id")?,
        club: Club {
            id: row.try_get("club_id")?,
            name: row.try_get("club_name")?,
            active: row.try_get("club_active")?,
        },
        placement,
        number: row.try_get("number")?,
    })
}

#[async_trait]
impl TeamRepository for PostgresTeamRepository {
    async fn find_by_division_id(&self, division_id: i64) -> Result<Vec<Team>, DomainError> {
        let rows = sqlx::query(&format!("{SELECT_TEAM} WHERE t.division_id = $1"))
            .bind(division_id)
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error)?;

        rows.iter()
            .map(|r| team_from_row(r).map_err(storage_error))
            .collect()
    }

    async fn find_available_by_club(&self, club_name: &str) -> Result<Vec<Team>, DomainError> {
        let rows = sqlx::query(&format!(
            "{SELECT_TEAM} WHERE c.name = $1 AND t.division_id IS NULL"
        ))
        .bind(club_name)
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error)?;

        rows.iter()
            .map(|r| team_from_row(r).map_err(storage_error))
            .collect()
    }

    async fn find_available_by_club_and_number(
        &self,
        club_name: &str,
        number: i32,
    ) -> Result<Option<Team>, DomainError> {
        let row = sqlx::query(&format!(
            "{SELECT_TEAM} WHERE c.name = $1 AND t.number = $2 AND t.division_id IS NULL"
        ))
        .bind(club_name)
        .bind(number)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error)?;

        row.map(|r| team_from_row(&r).map_err(storage_error))
            .transpose()
    }

    async fn insert(&self, club: &Club, number: i32) -> Result<(), DomainError> {
        sqlx::query("INSERT INTO teams (club_id, number) VALUES ($1, $2)")
            .bind(club.id)
            .bind(number)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    DomainError::TeamAlreadyExists {
                        club: club.name.clone(),
                        number,
                    }
                } else {
                    storage_error(e)
                }
            })?;

        Ok(())
    }

    async fn assign_division(
        &self,
        team_id: i64,
        division: &Division,
    ) -> Result<(), DomainError> {
        let result = sqlx::query("UPDATE teams SET division_id = $2 WHERE id = $1")
            .bind(team_id)
            .bind(division.id)
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::Internal(format!("no team with id {team_id}")));
        }
        Ok(())
    }
}
