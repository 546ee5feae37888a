use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;

use crate::api::errors::ApiError;
use crate::api::AppState;
use crate::domain::season::SeasonView;

#[derive(Debug, Deserialize)]
pub struct CreateSeasonRequest {
    pub name: String,
}

/// GET /api/seasons
pub async fn list_seasons(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, ApiError> {
    let names = state.seasons.get_season_names().await?;
    Ok(Json(names))
}

/// POST /api/seasons
pub async fn create_season(
    State(state): State<AppState>,
    Json(req): Json<CreateSeasonRequest>,
) -> Result<(StatusCode, Json<SeasonView>), ApiError> {
    if req.name.trim().is_empty() {
        return Err(ApiError::bad_request("season name must not be empty"));
    }
    let view = state.seasons.create_season(&req.name).await?;
    Ok((StatusCode::CREATED, Json(view)))
}
