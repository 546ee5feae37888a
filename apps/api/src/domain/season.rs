use serde::Serialize;

/// A league season. Divisions belong to exactly one season.
///
/// Season names are unique; the store enforces it. Seasons are not mutated
/// once divisions reference them, though no lock exists at this layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Season {
    pub id: i64,
    pub name: String,
}

/// Read-only projection of a [`Season`] returned across the core boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SeasonView {
    pub id: i64,
    pub name: String,
}
