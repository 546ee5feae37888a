use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use crate::domain::division::{Division, DivisionView};
use crate::domain::errors::DomainError;
use crate::domain::repositories::DivisionRepository;
use crate::services::SeasonService;

/// Division registry. Projects through the season registry.
pub struct DivisionService {
    divisions: Arc<dyn DivisionRepository>,
    season_service: Arc<SeasonService>,
}

impl DivisionService {
    pub fn new(divisions: Arc<dyn DivisionRepository>, season_service: Arc<SeasonService>) -> Self {
        Self {
            divisions,
            season_service,
        }
    }

    /// Groups the season's division names by level.
    ///
    /// Levels ascend (lower level = higher rank) and names are in lexical
    /// order within a level, so the output is deterministic regardless of
    /// insertion order. An unknown season yields an empty grouping, not an
    /// error.
    pub async fn divisions_of_season_by_level(
        &self,
        season_name: &str,
    ) -> Result<BTreeMap<i32, BTreeSet<String>>, DomainError> {
        let mut divisions_by_level: BTreeMap<i32, BTreeSet<String>> = BTreeMap::new();
        for division in self.divisions.find_by_season_name(season_name).await? {
            divisions_by_level
                .entry(division.level)
                .or_default()
                .insert(division.name);
        }
        Ok(divisions_by_level)
    }

    pub fn to_view(&self, division: &Division) -> DivisionView {
        DivisionView {
            id: division.id,
            name: division.name.clone(),
            level: division.level,
            season: self.season_service.to_view(&division.season),
        }
    }

    pub async fn get_division(&self, id: i64) -> Result<Option<Division>, DomainError> {
        self.divisions.find_by_id(id).await
    }

    /// Creates a division in the named season. The store enforces
    /// (season, name) uniqueness.
    pub async fn create_division(
        &self,
        season_name: &str,
        name: &str,
        level: i32,
    ) -> Result<DivisionView, DomainError> {
        let season = self.season_service.get_season(season_name).await?;
        let division = self.divisions.insert(name, level, &season).await?;
        Ok(self.to_view(&division))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::repositories::memory::{
        MemoryDivisionRepository, MemorySeasonRepository,
    };

    fn service() -> DivisionService {
        let seasons = Arc::new(MemorySeasonRepository::new());
        let divisions = Arc::new(MemoryDivisionRepository::new());
        DivisionService::new(divisions, Arc::new(SeasonService::new(seasons)))
    }

    async fn seed(service: &DivisionService) {
        service
            .season_service
            .create_season("season1")
            .await
            .expect("season created");
    }

    #[tokio::test]
    async fn groups_by_level_then_name() {
        let service = service();
        seed(&service).await;

        // Insertion order deliberately scrambled
        service
            .create_division("season1", "Stadtliga", 2)
            .await
            .expect("created");
        service
            .create_division("season1", "Landesliga", 1)
            .await
            .expect("created");
        service
            .create_division("season1", "Bezirksliga", 2)
            .await
            .expect("created");

        let grouped = service
            .divisions_of_season_by_level("season1")
            .await
            .expect("grouped");

        let levels: Vec<i32> = grouped.keys().copied().collect();
        assert_eq!(levels, vec![1, 2]);

        let level2: Vec<&String> = grouped[&2].iter().collect();
        assert_eq!(level2, vec!["Bezirksliga", "Stadtliga"]);
        assert_eq!(grouped[&1].len(), 1);
    }

    #[tokio::test]
    async fn unknown_season_yields_empty_grouping() {
        let service = service();
        seed(&service).await;

        let grouped = service
            .divisions_of_season_by_level("season2")
            .await
            .expect("grouped");
        assert!(grouped.is_empty());
    }

    #[tokio::test]
    async fn division_view_carries_season_view() {
        let service = service();
        seed(&service).await;

        let view = service
            .create_division("season1", "division1", 1)
            .await
            .expect("created");

        assert_eq!(view.name, "division1");
        assert_eq!(view.level, 1);
        assert_eq!(view.season.name, "season1");
    }

    #[tokio::test]
    async fn create_division_for_missing_season_fails() {
        let service = service();
        seed(&service).await;

        assert_eq!(
            service.create_division("season2", "division1", 1).await,
            Err(DomainError::SeasonNotFound("season2".to_string()))
        );
    }
}
