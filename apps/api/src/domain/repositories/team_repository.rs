use async_trait::async_trait;

use crate::domain::club::Club;
use crate::domain::division::Division;
use crate::domain::errors::DomainError;
use crate::domain::team::Team;

/// Repository contract for teams.
///
/// "Available" means not yet assigned to a division. Writes must be durable
/// before the call returns: the registry re-reads right after an insert and
/// relies on read-your-writes within one logical operation.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// All teams currently assigned to the division.
    async fn find_by_division_id(&self, division_id: i64) -> Result<Vec<Team>, DomainError>;

    /// Available teams of the named club, in no particular order.
    async fn find_available_by_club(&self, club_name: &str) -> Result<Vec<Team>, DomainError>;

    /// The available team of the named club with this number, if any.
    async fn find_available_by_club_and_number(
        &self,
        club_name: &str,
        number: i32,
    ) -> Result<Option<Team>, DomainError>;

    /// Inserts a new available team for the club. A store-level unique
    /// constraint on (club, number, unassigned) is the backstop against
    /// concurrent duplicate inserts; implementations surface that conflict
    /// as [`DomainError::TeamAlreadyExists`].
    async fn insert(&self, club: &Club, number: i32) -> Result<(), DomainError>;

    /// Places the team into a division. Administration capability, not part
    /// of the registry surface; must not alter the team's club or number.
    async fn assign_division(&self, team_id: i64, division: &Division)
        -> Result<(), DomainError>;
}
