use serde::Serialize;

use super::club::{Club, ClubView};
use super::division::{Division, DivisionView};

/// Where a team stands in its lifecycle.
///
/// A team starts out `Available` (no division) and becomes `Placed` once an
/// operator assigns it to a division. Placement never changes the team's
/// club or number, and no transition back to `Available` exists here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    Available,
    Placed(Division),
}

impl Placement {
    pub fn is_available(&self) -> bool {
        matches!(self, Placement::Available)
    }

    pub fn division(&self) -> Option<&Division> {
        match self {
            Placement::Available => None,
            Placement::Placed(division) => Some(division),
        }
    }
}

/// A team fielded by a club.
///
/// `number` orders a club's teams ("club1 1" is the first team). Among the
/// club's still-available teams the number is unique; the store backs this
/// with a partial unique index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub id: i64,
    pub club: Club,
    pub placement: Placement,
    pub number: i32,
}

/// Read-only projection of a [`Team`]. An available team carries no
/// division view.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TeamView {
    pub id: i64,
    pub club: ClubView,
    pub division: Option<DivisionView>,
    pub number: i32,
}

impl TeamView {
    /// Display name shown to operators, e.g. "Kreuzberg 2".
    pub fn name(&self) -> String {
        format!("{} {}", self.club.name, self.number)
    }
}
