use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;

use crate::api::errors::ApiError;
use crate::api::AppState;
use crate::domain::club::ClubView;

#[derive(Debug, Deserialize)]
pub struct CreateClubRequest {
    pub name: String,
}

/// GET /api/clubs
pub async fn list_clubs(State(state): State<AppState>) -> Result<Json<Vec<ClubView>>, ApiError> {
    let clubs = state.clubs.get_all_clubs().await?;
    Ok(Json(clubs))
}

/// GET /api/clubs/active
pub async fn list_active_clubs(
    State(state): State<AppState>,
) -> Result<Json<Vec<ClubView>>, ApiError> {
    let clubs = state.clubs.get_all_active_clubs().await?;
    Ok(Json(clubs))
}

/// POST /api/clubs
pub async fn create_club(
    State(state): State<AppState>,
    Json(req): Json<CreateClubRequest>,
) -> Result<(StatusCode, Json<ClubView>), ApiError> {
    if req.name.trim().is_empty() {
        return Err(ApiError::bad_request("club name must not be empty"));
    }
    let view = state.clubs.create_club(&req.name).await?;
    Ok((StatusCode::CREATED, Json(view)))
}
