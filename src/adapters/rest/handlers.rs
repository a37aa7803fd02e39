//! Probe endpoint handlers using axum

use crate::application::Supervisor;
use crate::domain::value_objects::{HealthState, RunState};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;
use tracing::debug;

/// Shared probe endpoint state
pub type AppState = Arc<Supervisor>;

const USAGE: &str = "supported probes: GET /healthz, GET /readyz\n";

/// GET /healthz - process health probe
///
/// 200 unless the aggregated health is unhealthy (degraded still passes),
/// body is the full health snapshot.
pub async fn healthz(State(supervisor): State<AppState>) -> impl IntoResponse {
    let health = supervisor.health().await;
    let code = if health.healthy == HealthState::Unhealthy {
        StatusCode::SERVICE_UNAVAILABLE
    } else {
        StatusCode::OK
    };

    debug!(healthy = %health.healthy, code = %code, "healthz probe");

    (code, Json(health))
}

/// GET /readyz - readiness probe
///
/// 200 iff the aggregated run state is running, body is the full status
/// snapshot.
pub async fn readyz(State(supervisor): State<AppState>) -> impl IntoResponse {
    let status = supervisor.status();
    let code = if status.state == RunState::Running {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    debug!(state = %status.state, code = %code, "readyz probe");

    (code, Json(status))
}

/// Fallback for any other path.
pub async fn usage() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, USAGE)
}
