use std::collections::{BTreeMap, BTreeSet};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::api::errors::ApiError;
use crate::api::AppState;
use crate::domain::division::DivisionView;

#[derive(Debug, Deserialize)]
pub struct CreateDivisionRequest {
    pub season_name: String,
    pub name: String,
    pub level: i32,
}

/// GET /api/seasons/:name/divisions
///
/// Division names grouped by level; levels ascend, names lexical. An
/// unknown season is an empty grouping, not a 404.
pub async fn divisions_of_season(
    State(state): State<AppState>,
    Path(season_name): Path<String>,
) -> Result<Json<BTreeMap<i32, BTreeSet<String>>>, ApiError> {
    let grouped = state
        .divisions
        .divisions_of_season_by_level(&season_name)
        .await?;
    Ok(Json(grouped))
}

/// POST /api/divisions
pub async fn create_division(
    State(state): State<AppState>,
    Json(req): Json<CreateDivisionRequest>,
) -> Result<(StatusCode, Json<DivisionView>), ApiError> {
    if req.level < 1 {
        return Err(ApiError::bad_request("level must be a positive integer"));
    }
    let view = state
        .divisions
        .create_division(&req.season_name, &req.name, req.level)
        .await?;
    Ok((StatusCode::CREATED, Json(view)))
}
