//! In-memory repositories.
//!
//! Back the test suite and database-free runs. Same contracts as the
//! postgres adapters, including the uniqueness backstops, so the services
//! cannot tell them apart.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::club::Club;
use crate::domain::division::Division;
use crate::domain::errors::DomainError;
use crate::domain::repositories::{
    ClubRepository, DivisionRepository, SeasonRepository, TeamRepository, UserRepository,
};
use crate::domain::season::Season;
use crate::domain::team::{Placement, Team};
use crate::domain::user::User;

struct Table<T> {
    rows: Vec<T>,
    next_id: i64,
}

impl<T> Table<T> {
    fn new() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
        }
    }

    fn take_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

// ----- seasons -----

pub struct MemorySeasonRepository {
    table: Mutex<Table<Season>>,
}

impl MemorySeasonRepository {
    pub fn new() -> Self {
        Self {
            table: Mutex::new(Table::new()),
        }
    }
}

impl Default for MemorySeasonRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SeasonRepository for MemorySeasonRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Season>, DomainError> {
        let table = self.table.lock().expect("lock poisoned");
        Ok(table.rows.iter().find(|s| s.name == name).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Season>, DomainError> {
        let table = self.table.lock().expect("lock poisoned");
        let mut seasons = table.rows.clone();
        seasons.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(seasons)
    }

    async fn insert(&self, name: &str) -> Result<Season, DomainError> {
        let mut table = self.table.lock().expect("lock poisoned");
        if table.rows.iter().any(|s| s.name == name) {
            return Err(DomainError::SeasonAlreadyExists(name.to_string()));
        }
        let season = Season {
            id: table.take_id(),
            name: name.to_string(),
        };
        table.rows.push(season.clone());
        Ok(season)
    }
}

// ----- divisions -----

pub struct MemoryDivisionRepository {
    table: Mutex<Table<Division>>,
}

impl MemoryDivisionRepository {
    pub fn new() -> Self {
        Self {
            table: Mutex::new(Table::new()),
        }
    }
}

impl Default for MemoryDivisionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DivisionRepository for MemoryDivisionRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Division>, DomainError> {
        let table = self.table.lock().expect("lock poisoned");
        Ok(table.rows.iter().find(|d| d.id == id).cloned())
    }

    async fn find_by_season_name(&self, season_name: &str) -> Result<Vec<Division>, DomainError> {
        let table = self.table.lock().expect("lock poisoned");
        Ok(table
            .rows
            .iter()
            .filter(|d| d.season.name == season_name)
            .cloned()
            .collect())
    }

    async fn insert(
        &self,
        name: &str,
        level: i32,
        season: &Season,
    ) -> Result<Division, DomainError> {
        let mut table = self.table.lock().expect("lock poisoned");
        let division = Division {
            id: table.take_id(),
            name: name.to_string(),
            level,
            season: season.clone(),
        };
        table.rows.push(division.clone());
        Ok(division)
    }
}

// ----- clubs -----

pub struct MemoryClubRepository {
    table: Mutex<Table<Club>>,
}

impl MemoryClubRepository {
    pub fn new() -> Self {
        Self {
            table: Mutex::new(Table::new()),
        }
    }

    /// Flips a club inactive. Administration capability, used by tests.
    pub fn deactivate(&self, name: &str) {
        let mut table = self.table.lock().expect("lock poisoned");
        if let Some(club) = table.rows.iter_mut().find(|c| c.name == name) {
            club.active = false;
        }
    }
}

impl Default for MemoryClubRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClubRepository for MemoryClubRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Club>, DomainError> {
        let table = self.table.lock().expect("lock poisoned");
        Ok(table.rows.iter().find(|c| c.name == name).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Club>, DomainError> {
        let table = self.table.lock().expect("lock poisoned");
        let mut clubs = table.rows.clone();
        clubs.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(clubs)
    }

    async fn list_active(&self) -> Result<Vec<Club>, DomainError> {
        let mut clubs = self.list_all().await?;
        clubs.retain(|c| c.active);
        Ok(clubs)
    }

    async fn insert(&self, name: &str) -> Result<Club, DomainError> {
        let mut table = self.table.lock().expect("lock poisoned");
        if table.rows.iter().any(|c| c.name == name) {
            return Err(DomainError::ClubAlreadyExists(name.to_string()));
        }
        let club = Club {
            id: table.take_id(),
            name: name.to_string(),
            active: true,
        };
        table.rows.push(club.clone());
        Ok(club)
    }
}

// ----- teams -----

pub struct MemoryTeamRepository {
    table: Mutex<Table<Team>>,
}

impl MemoryTeamRepository {
    pub fn new() -> Self {
        Self {
            table: Mutex::new(Table::new()),
        }
    }
}

impl Default for MemoryTeamRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TeamRepository for MemoryTeamRepository {
    async fn find_by_division_id(&self, division_id: i64) -> Result<Vec<Team>, DomainError> {
        let table = self.table.lock().expect("lock poisoned");
        Ok(table
            .rows
            .iter()
            .filter(|t| t.placement.division().is_some_and(|d| d.id == division_id))
            .cloned()
            .collect())
    }

    async fn find_available_by_club(&self, club_name: &str) -> Result<Vec<Team>, DomainError> {
        let table = self.table.lock().expect("lock poisoned");
        Ok(table
            .rows
            .iter()
            .filter(|t| t.placement.is_available() && t.club.name == club_name)
            .cloned()
            .collect())
    }

    async fn find_available_by_club_and_number(
        &self,
        club_name: &str,
        number: i32,
    ) -> Result<Option<Team>, DomainError> {
        let table = self.table.lock().expect("lock poisoned");
        Ok(table
            .rows
            .iter()
            .find(|t| {
                t.placement.is_available() && t.club.name == club_name && t.number == number
            })
            .cloned())
    }

    async fn insert(&self, club: &Club, number: i32) -> Result<(), DomainError> {
        let mut table = self.table.lock().expect("lock poisoned");
        // Same backstop the partial unique index provides in postgres
        if table
            .rows
            .iter()
            .any(|t| t.placement.is_available() && t.club.id == club.id && t.number == number)
        {
            return Err(DomainError::TeamAlreadyExists {
                club: club.name.clone(),
                number,
            });
        }
        let team = Team {
            id: table.take_id(),
            club: club.clone(),
            placement: Placement::Available,
            number,
        };
        table.rows.push(team);
        Ok(())
    }

    async fn assign_division(
        &self,
        team_id: i64,
        division: &Division,
    ) -> Result<(), DomainError> {
        let mut table = self.table.lock().expect("lock poisoned");
        let team = table
            .rows
            .iter_mut()
            .find(|t| t.id == team_id)
            .ok_or_else(|| DomainError::Internal(format!("no team with id {team_id}")))?;
        team.placement = Placement::Placed(division.clone());
        Ok(())
    }
}

// ----- users -----

pub struct MemoryUserRepository {
    rows: Mutex<Vec<User>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
        }
    }
}

impl Default for MemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError> {
        let rows = self.rows.lock().expect("lock poisoned");
        Ok(rows.iter().any(|u| u.username == username))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let rows = self.rows.lock().expect("lock poisoned");
        Ok(rows.iter().find(|u| u.username == username).cloned())
    }

    async fn insert(&self, user: User) -> Result<(), DomainError> {
        let mut rows = self.rows.lock().expect("lock poisoned");
        if rows.iter().any(|u| u.username == user.username) {
            return Err(DomainError::UserAlreadyExists(user.username));
        }
        rows.push(user);
        Ok(())
    }

    async fn update_password(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<(), DomainError> {
        let mut rows = self.rows.lock().expect("lock poisoned");
        let user = rows
            .iter_mut()
            .find(|u| u.username == username)
            .ok_or_else(|| DomainError::UserNotFound(username.to_string()))?;
        user.password_hash = password_hash.to_string();
        Ok(())
    }
}
