//! Service health endpoint for the FarmArea API
//!
//! Used by uptime checks and the deployment pipeline to confirm the
//! server answers and can reach Postgres.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

/// Liveness and database reachability summary
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub database: &'static str,
}

/// Report liveness and probe the database with a trivial query
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match sqlx::query("SELECT 1").execute(&state.db).await {
        Ok(_) => "reachable",
        Err(_) => "unreachable",
    };

    Json(HealthResponse {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        database,
    })
}
