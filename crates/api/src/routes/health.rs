use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the database is reachable.
    pub db_healthy: bool,
    /// Open connections in the pool.
    pub pool_connections: u32,
    /// Idle connections in the pool.
    pub pool_idle: usize,
}

/// GET /health -- returns service status, database reachability, and
/// connection pool occupancy.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = photomark_db::health_check(&state.pool).await.is_ok();

    let status = if db_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        pool_connections: state.pool.size(),
        pool_idle: state.pool.num_idle(),
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
