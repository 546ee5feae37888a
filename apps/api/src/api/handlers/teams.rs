use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::api::errors::ApiError;
use crate::api::AppState;
use crate::domain::team::TeamView;

#[derive(Debug, Deserialize)]
pub struct CreateTeamRequest {
    pub club_name: String,
    pub number: i32,
}

#[derive(Debug, Deserialize)]
pub struct CreateTeamsRequest {
    pub club_name: String,
    pub count: i32,
}

/// A team plus its derived display name.
#[derive(Debug, Serialize)]
pub struct TeamResponse {
    pub name: String,
    #[serde(flatten)]
    pub team: TeamView,
}

impl From<TeamView> for TeamResponse {
    fn from(team: TeamView) -> Self {
        Self {
            name: team.name(),
            team,
        }
    }
}

/// GET /api/clubs/:name/teams
///
/// The club's available teams, ascending by number.
pub async fn teams_of_club(
    State(state): State<AppState>,
    Path(club_name): Path<String>,
) -> Result<Json<Vec<TeamResponse>>, ApiError> {
    let teams = state.teams.teams_of_club(&club_name).await?;
    Ok(Json(teams.into_iter().map(TeamResponse::from).collect()))
}

/// GET /api/divisions/:id/teams
///
/// The division's teams and their count, for capacity displays.
pub async fn teams_of_division(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let division = state
        .divisions
        .get_division(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("division not found: {id}")))?;
    let division_view = state.divisions.to_view(&division);

    let teams: Vec<TeamResponse> = state
        .teams
        .teams_of_division(&division_view)
        .await?
        .into_iter()
        .map(TeamResponse::from)
        .collect();
    let count = state.teams.count_teams_of_division(&division_view).await?;

    Ok(Json(json!({ "teams": teams, "count": count })))
}

/// POST /api/teams
pub async fn create_team(
    State(state): State<AppState>,
    Json(req): Json<CreateTeamRequest>,
) -> Result<(StatusCode, Json<TeamResponse>), ApiError> {
    if req.number < 1 {
        return Err(ApiError::bad_request("number must be a positive integer"));
    }
    let view = state.teams.create_team(&req.club_name, req.number).await?;
    Ok((StatusCode::CREATED, Json(TeamResponse::from(view))))
}

/// POST /api/teams/batch
///
/// Creates teams numbered 1..=count, skipping numbers that already exist.
pub async fn create_teams(
    State(state): State<AppState>,
    Json(req): Json<CreateTeamsRequest>,
) -> Result<StatusCode, ApiError> {
    if req.count < 0 {
        return Err(ApiError::bad_request("count must not be negative"));
    }
    state.teams.create_teams(&req.club_name, req.count).await?;
    Ok(StatusCode::NO_CONTENT)
}
