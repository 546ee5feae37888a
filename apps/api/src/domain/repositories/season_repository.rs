use async_trait::async_trait;

use crate::domain::errors::DomainError;
use crate::domain::season::Season;

/// Repository contract for seasons.
#[async_trait]
pub trait SeasonRepository: Send + Sync {
    async fn find_by_name(&self, name: &str) -> Result<Option<Season>, DomainError>;

    /// All seasons, ordered by name.
    async fn list_all(&self) -> Result<Vec<Season>, DomainError>;

    /// Inserts a season and returns it as stored (id assigned by the store).
    async fn insert(&self, name: &str) -> Result<Season, DomainError>;
}
