use std::sync::Arc;

use crate::domain::club::{Club, ClubView};
use crate::domain::errors::DomainError;
use crate::domain::repositories::ClubRepository;

/// Club registry.
pub struct ClubService {
    clubs: Arc<dyn ClubRepository>,
}

impl ClubService {
    pub fn new(clubs: Arc<dyn ClubRepository>) -> Self {
        Self { clubs }
    }

    pub fn to_view(&self, club: &Club) -> ClubView {
        ClubView {
            id: club.id,
            name: club.name.clone(),
            active: club.active,
        }
    }

    pub async fn get_club(&self, name: &str) -> Result<Club, DomainError> {
        self.clubs
            .find_by_name(name)
            .await?
            .ok_or_else(|| DomainError::ClubNotFound(name.to_string()))
    }

    /// All clubs in display order.
    pub async fn get_all_clubs(&self) -> Result<Vec<ClubView>, DomainError> {
        let clubs = self.clubs.list_all().await?;
        Ok(clubs.iter().map(|c| self.to_view(c)).collect())
    }

    /// Active clubs only, in display order.
    pub async fn get_all_active_clubs(&self) -> Result<Vec<ClubView>, DomainError> {
        let clubs = self.clubs.list_active().await?;
        Ok(clubs.iter().map(|c| self.to_view(c)).collect())
    }

    /// Creates a club; new clubs start out active.
    pub async fn create_club(&self, name: &str) -> Result<ClubView, DomainError> {
        if self.clubs.find_by_name(name).await?.is_some() {
            return Err(DomainError::ClubAlreadyExists(name.to_string()));
        }
        let club = self.clubs.insert(name).await?;
        Ok(self.to_view(&club))
    }
}
