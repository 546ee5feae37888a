// Repository implementations (data access layer)
// Adapters that implement the domain repository contracts

pub mod memory;
pub mod postgres_club_repository;
pub mod postgres_division_repository;
pub mod postgres_season_repository;
pub mod postgres_team_repository;
pub mod postgres_user_repository;

pub use postgres_club_repository::PostgresClubRepository;
pub use postgres_division_repository::PostgresDivisionRepository;
pub use postgres_season_repository::PostgresSeasonRepository;
pub use postgres_team_repository::PostgresTeamRepository;
pub use postgres_user_repository::PostgresUserRepository;

use crate::domain::errors::DomainError;

/// Maps a database failure into the domain's internal-error bucket.
pub(crate) fn storage_error(e: sqlx::Error) -> DomainError {
    DomainError::Internal(e.to_string())
}

/// True when the error is the store's unique-constraint backstop firing.
pub(crate) fn is_unique_violation(e: &sqlx::Error) -> bool {
    matches!(
        e,
        sqlx::Error::Database(db) if db.is_unique_violation()
    )
}
