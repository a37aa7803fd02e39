//! Readiness poller
//!
//! A blocking gate for callers that need to wait synchronously for a set of
//! services to come up — e.g. a startup path that must not accept work until
//! its dependencies are running. Independent of the supervisor: it talks to
//! the services directly.

use crate::domain::ports::Service;
use crate::domain::value_objects::{HealthState, RunState};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::debug;

async fn service_ready(service: &Arc<dyn Service>, required_health: Option<HealthState>) -> bool {
    if service.status().state != RunState::Running {
        return false;
    }
    match required_health {
        Some(required) => service.health().await.healthy.meets(required),
        None => true,
    }
}

/// Poll until every service reports running — and, when `required_health`
/// is given, until each one's health meets that bar — all within the same
/// polling round. Sleeps `poll_interval` between rounds and retries
/// indefinitely; callers needing a bounded wait wrap this in their own
/// timeout or cancellation.
///
/// Health calls are not bounded here; a service whose health never settles
/// stalls the round (bounded health querying is the supervisor's job).
pub async fn wait_until_ready(
    services: &[Arc<dyn Service>],
    poll_interval: Duration,
    required_health: Option<HealthState>,
) {
    loop {
        let mut ready = true;
        for service in services {
            if !service_ready(service, required_health).await {
                debug!(service = %service.name(), "not ready yet");
                ready = false;
                break;
            }
        }
        if ready {
            return;
        }
        sleep(poll_interval).await;
    }
}
