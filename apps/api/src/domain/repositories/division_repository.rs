use async_trait::async_trait;

use crate::domain::division::Division;
use crate::domain::errors::DomainError;
use crate::domain::season::Season;

/// Repository contract for divisions. Reads carry the owning season along.
#[async_trait]
pub trait DivisionRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Division>, DomainError>;

    /// All divisions of the named season; empty when the season is unknown.
    async fn find_by_season_name(&self, season_name: &str) -> Result<Vec<Division>, DomainError>;

    /// Inserts a division for the given season and returns it as stored.
    async fn insert(
        &self,
        name: &str,
        level: i32,
        season: &Season,
    ) -> Result<Division, DomainError>;
}
