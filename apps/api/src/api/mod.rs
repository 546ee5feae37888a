// API layer (HTTP adapter). Handlers stay thin: parse, delegate to a
// registry, render. They never touch a repository directly.

pub mod errors;
pub mod handlers;

use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::auth::PasswordHasher;
use crate::domain::repositories::{
    ClubRepository, DivisionRepository, SeasonRepository, TeamRepository, UserRepository,
};
use crate::services::{ClubService, DivisionService, SeasonService, TeamService, UserService};

/// Shared handler state: the wired registries.
#[derive(Clone)]
pub struct AppState {
    pub seasons: Arc<SeasonService>,
    pub divisions: Arc<DivisionService>,
    pub clubs: Arc<ClubService>,
    pub teams: Arc<TeamService>,
    pub users: Arc<UserService>,
}

impl AppState {
    /// Wires the registries from their collaborators. Explicit construction,
    /// no container: each service receives exactly what it depends on.
    pub fn new(
        season_repo: Arc<dyn SeasonRepository>,
        division_repo: Arc<dyn DivisionRepository>,
        club_repo: Arc<dyn ClubRepository>,
        team_repo: Arc<dyn TeamRepository>,
        user_repo: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        let seasons = Arc::new(SeasonService::new(season_repo));
        let clubs = Arc::new(ClubService::new(club_repo));
        let divisions = Arc::new(DivisionService::new(division_repo, seasons.clone()));
        let teams = Arc::new(TeamService::new(
            team_repo,
            divisions.clone(),
            clubs.clone(),
        ));
        let users = Arc::new(UserService::new(user_repo, hasher));

        Self {
            seasons,
            divisions,
            clubs,
            teams,
            users,
        }
    }
}

/// Builds the application router. Shared by `main` and the API tests.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/seasons", get(handlers::seasons::list_seasons))
        .route("/api/seasons", post(handlers::seasons::create_season))
        .route(
            "/api/seasons/:name/divisions",
            get(handlers::divisions::divisions_of_season),
        )
        .route("/api/divisions", post(handlers::divisions::create_division))
        .route(
            "/api/divisions/:id/teams",
            get(handlers::teams::teams_of_division),
        )
        .route("/api/clubs", get(handlers::clubs::list_clubs))
        .route("/api/clubs/active", get(handlers::clubs::list_active_clubs))
        .route("/api/clubs", post(handlers::clubs::create_club))
        .route(
            "/api/clubs/:name/teams",
            get(handlers::teams::teams_of_club),
        )
        .route("/api/teams", post(handlers::teams::create_team))
        .route("/api/teams/batch", post(handlers::teams::create_teams))
        .route("/api/users", post(handlers::users::create_user))
        .route(
            "/api/users/:username/password",
            put(handlers::users::change_password),
        )
        .with_state(state)
}
