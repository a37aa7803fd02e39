//! Shared mock service for the integration scenarios.
//!
//! Follows the polling contract: `start`/`stop` only move the service into
//! the transition state, and the test drives completion explicitly with the
//! `mock_*` methods, so partially-started and partially-stopped registries
//! can be observed deterministically.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use svc_supervisor::{HealthState, RunState, Service, ServiceHealth, ServiceStatus};

/// Wire the supervisor's structured logs into the test output, once.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

pub struct MockService {
    name: String,
    state: Mutex<RunState>,
    message: Mutex<Option<String>>,
    healthy: Mutex<HealthState>,
}

impl MockService {
    pub fn new(name: &str) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            state: Mutex::new(RunState::Stopped),
            message: Mutex::new(None),
            healthy: Mutex::new(HealthState::Healthy),
        })
    }

    /// Complete an in-flight start.
    pub fn mock_started(&self) {
        *self.state.lock().unwrap() = RunState::Running;
    }

    /// Complete an in-flight stop.
    pub fn mock_stopped(&self) {
        *self.state.lock().unwrap() = RunState::Stopped;
    }

    /// Fail an in-flight start with the given message.
    pub fn mock_start_failed(&self, message: &str) {
        *self.state.lock().unwrap() = RunState::Errored;
        *self.message.lock().unwrap() = Some(message.to_string());
    }

    pub fn mock_health(&self, healthy: HealthState) {
        *self.healthy.lock().unwrap() = healthy;
    }
}

#[async_trait]
impl Service for MockService {
    fn name(&self) -> &str {
        &self.name
    }

    fn status(&self) -> ServiceStatus {
        ServiceStatus {
            state: *self.state.lock().unwrap(),
            message: self.message.lock().unwrap().clone(),
        }
    }

    async fn health(&self) -> ServiceHealth {
        ServiceHealth::new(*self.healthy.lock().unwrap())
    }

    fn start(&self) {
        *self.state.lock().unwrap() = RunState::Starting;
    }

    fn stop(&self) {
        *self.state.lock().unwrap() = RunState::Stopping;
    }
}
