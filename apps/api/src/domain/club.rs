use serde::Serialize;

/// A chess club. Clubs field teams; a club name is unique league-wide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Club {
    pub id: i64,
    pub name: String,
    pub active: bool,
}

/// Read-only projection of a [`Club`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ClubView {
    pub id: i64,
    pub name: String,
    pub active: bool,
}
