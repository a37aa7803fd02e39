//! Probe endpoint router configuration

use super::handlers::{healthz, readyz, usage, AppState};
use axum::{routing::get, Router};

/// Build the probe endpoint router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .fallback(usage)
        .with_state(state)
}
