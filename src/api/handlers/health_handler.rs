//! Liveness and version endpoints.

use axum::{extract::State, response::Json, routing::get, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PingResponse {
    pub pong: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VersionResponse {
    #[schema(example = "development")]
    pub env: String,
    #[schema(example = "0.1.0")]
    pub version: String,
    #[schema(example = "budget-api")]
    pub name: String,
}

pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/ping", get(ping))
        .route("/version", get(version))
}

#[utoipa::path(
    get,
    path = "/api/health/ping",
    tag = "Health",
    responses((status = 200, description = "Server is up", body = PingResponse))
)]
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse { pong: true })
}

#[utoipa::path(
    get,
    path = "/api/health/version",
    tag = "Health",
    responses((status = 200, description = "Build information", body = VersionResponse))
)]
pub async fn version(State(state): State<AppState>) -> Json<VersionResponse> {
    Json(VersionResponse {
        env: state.config.env.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        name: env!("CARGO_PKG_NAME").to_string(),
    })
}
