use thiserror::Error;

/// Caller-facing failures of the registry operations.
///
/// Every variant is a recoverable condition the presentation layer can
/// render a specific message for; none is a process-ending defect. The
/// registries never retry — a failure surfaces immediately.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("season does not exist: {0}")]
    SeasonNotFound(String),

    #[error("club does not exist: {0}")]
    ClubNotFound(String),

    #[error("user does not exist: {0}")]
    UserNotFound(String),

    /// A still-unassigned team with this (club, number) pair already exists.
    #[error("team already exists, club: {club}, number: {number}")]
    TeamAlreadyExists { club: String, number: i32 },

    #[error("season already exists: {0}")]
    SeasonAlreadyExists(String),

    #[error("club already exists: {0}")]
    ClubAlreadyExists(String),

    #[error("user already exists: {0}")]
    UserAlreadyExists(String),

    #[error("old password does not match")]
    WrongPassword,

    /// Store or hashing failure; nothing the caller did wrong.
    #[error("internal error: {0}")]
    Internal(String),
}
