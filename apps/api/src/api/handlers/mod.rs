// HTTP handlers, one module per registry.

pub mod clubs;
pub mod divisions;
pub mod seasons;
pub mod teams;
pub mod users;

use axum::http::StatusCode;

/// GET /health
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}
