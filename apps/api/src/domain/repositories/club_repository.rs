use async_trait::async_trait;

use crate::domain::club::Club;
use crate::domain::errors::DomainError;

/// Repository contract for clubs.
#[async_trait]
pub trait ClubRepository: Send + Sync {
    async fn find_by_name(&self, name: &str) -> Result<Option<Club>, DomainError>;

    /// All clubs, ordered by name for display.
    async fn list_all(&self) -> Result<Vec<Club>, DomainError>;

    /// Active clubs only, ordered by name.
    async fn list_active(&self) -> Result<Vec<Club>, DomainError>;

    /// Inserts a club (active by default) and returns it as stored.
    async fn insert(&self, name: &str) -> Result<Club, DomainError>;
}
