//! Chess League API Library
//!
//! Roster administration for a team chess league: seasons, divisions,
//! clubs, teams and operator accounts. Domain logic lives in the
//! registries; storage sits behind repository contracts.

pub mod api;
pub mod auth;
pub mod domain;
pub mod infrastructure;
pub mod services;
