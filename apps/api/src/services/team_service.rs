use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::division::DivisionView;
use crate::domain::errors::DomainError;
use crate::domain::repositories::TeamRepository;
use crate::domain::team::{Team, TeamView};
use crate::services::{ClubService, DivisionService};

/// Team registry. The central piece: teams tie clubs to divisions, and the
/// (club, number) pair is unique among teams not yet placed in a division.
pub struct TeamService {
    teams: Arc<dyn TeamRepository>,
    division_service: Arc<DivisionService>,
    club_service: Arc<ClubService>,
}

impl TeamService {
    pub fn new(
        teams: Arc<dyn TeamRepository>,
        division_service: Arc<DivisionService>,
        club_service: Arc<ClubService>,
    ) -> Self {
        Self {
            teams,
            division_service,
            club_service,
        }
    }

    /// All teams assigned to the division. Order carries no meaning; ids
    /// make duplicates impossible.
    pub async fn teams_of_division(
        &self,
        division: &DivisionView,
    ) -> Result<HashSet<TeamView>, DomainError> {
        let teams = self.teams.find_by_division_id(division.id).await?;
        Ok(teams.iter().map(|t| self.to_view(t)).collect())
    }

    /// Available teams of the named club (no division, hence no season yet),
    /// sorted ascending by number. Operators pick from this list when
    /// assigning, so the order must be stable.
    pub async fn teams_of_club(&self, club_name: &str) -> Result<Vec<TeamView>, DomainError> {
        let mut teams = self.teams.find_available_by_club(club_name).await?;
        teams.sort_by_key(|t| t.number);
        Ok(teams.iter().map(|t| self.to_view(t)).collect())
    }

    /// Number of teams in the division, for capacity displays.
    pub async fn count_teams_of_division(
        &self,
        division: &DivisionView,
    ) -> Result<usize, DomainError> {
        let teams = self.teams.find_by_division_id(division.id).await?;
        Ok(teams.len())
    }

    /// Creates one team for the club with the given number.
    ///
    /// Fails with [`DomainError::TeamAlreadyExists`] when an unassigned team
    /// with that (club, number) pair exists already. The pre-check here is
    /// best effort; the store's unique constraint is the backstop under
    /// concurrent callers. After the insert the row is read back and
    /// projected, so the returned view reflects the record exactly as the
    /// store has it, not a locally constructed guess.
    pub async fn create_team(
        &self,
        club_name: &str,
        number: i32,
    ) -> Result<TeamView, DomainError> {
        if self
            .teams
            .find_available_by_club_and_number(club_name, number)
            .await?
            .is_some()
        {
            return Err(DomainError::TeamAlreadyExists {
                club: club_name.to_string(),
                number,
            });
        }

        let club = self.club_service.get_club(club_name).await?;
        self.teams.insert(&club, number).await?;

        let team = self
            .teams
            .find_available_by_club_and_number(club_name, number)
            .await?
            .ok_or_else(|| {
                DomainError::Internal(format!(
                    "team not readable after insert, club: {club_name}, number: {number}"
                ))
            })?;
        Ok(self.to_view(&team))
    }

    /// Creates teams numbered 1..=count for the club.
    ///
    /// Idempotent and additive: a number that already exists is skipped, so
    /// repeated calls (or a larger count after a smaller one) only fill the
    /// gaps. Any failure other than the per-number duplicate — notably an
    /// unknown club — aborts the batch immediately.
    pub async fn create_teams(&self, club_name: &str, count: i32) -> Result<(), DomainError> {
        for number in 1..=count {
            match self.create_team(club_name, number).await {
                Ok(_) => {}
                Err(DomainError::TeamAlreadyExists { .. }) => {
                    tracing::debug!(club = club_name, number, "team exists, skipping");
                }
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    /// Projects a team; a placed team's division is converted recursively,
    /// an available one yields no division view.
    pub fn to_view(&self, team: &Team) -> TeamView {
        TeamView {
            id: team.id,
            club: self.club_service.to_view(&team.club),
            division: team
                .placement
                .division()
                .map(|d| self.division_service.to_view(d)),
            number: team.number,
        }
    }
}
