use std::sync::Arc;

use crate::domain::errors::DomainError;
use crate::domain::repositories::SeasonRepository;
use crate::domain::season::{Season, SeasonView};

/// Season registry. The leaf of the registry stack: divisions project
/// through it, nothing below it.
pub struct SeasonService {
    seasons: Arc<dyn SeasonRepository>,
}

impl SeasonService {
    pub fn new(seasons: Arc<dyn SeasonRepository>) -> Self {
        Self { seasons }
    }

    /// Pure projection; no failure modes.
    pub fn to_view(&self, season: &Season) -> SeasonView {
        SeasonView {
            id: season.id,
            name: season.name.clone(),
        }
    }

    pub async fn get_season(&self, name: &str) -> Result<Season, DomainError> {
        self.seasons
            .find_by_name(name)
            .await?
            .ok_or_else(|| DomainError::SeasonNotFound(name.to_string()))
    }

    /// Season names in display order, consumed by navigation.
    pub async fn get_season_names(&self) -> Result<Vec<String>, DomainError> {
        let seasons = self.seasons.list_all().await?;
        Ok(seasons.into_iter().map(|s| s.name).collect())
    }

    pub async fn create_season(&self, name: &str) -> Result<SeasonView, DomainError> {
        if self.seasons.find_by_name(name).await?.is_some() {
            return Err(DomainError::SeasonAlreadyExists(name.to_string()));
        }
        let season = self.seasons.insert(name).await?;
        Ok(self.to_view(&season))
    }
}
