use serde::Serialize;

use super::season::{Season, SeasonView};

/// A division within a season.
///
/// `level` is the competitive rank: lower value means higher rank, and it is
/// the ordering key for season groupings. A division cannot exist without
/// its season, so reads carry the season value along.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Division {
    pub id: i64,
    pub name: String,
    pub level: i32,
    pub season: Season,
}

/// Read-only projection of a [`Division`], season included.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DivisionView {
    pub id: i64,
    pub name: String,
    pub level: i32,
    pub season: SeasonView,
}
