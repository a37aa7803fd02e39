//! Service capability port
//!
//! The contract every supervised unit implements. The supervisor owns no
//! service state: a service's reported status is the ground truth, and
//! `start`/`stop` only *initiate* transitions that later `status()` calls
//! observe (polling contract).

use crate::domain::value_objects::{HealthState, RunState};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A service's self-reported run state, with an optional detail message
/// (typically the failure description when errored).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub state: RunState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ServiceStatus {
    pub fn new(state: RunState) -> Self {
        Self {
            state,
            message: None,
        }
    }

    pub fn with_message(state: RunState, message: impl Into<String>) -> Self {
        Self {
            state,
            message: Some(message.into()),
        }
    }
}

/// A service's self-reported health, with an optional diagnostic message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceHealth {
    pub healthy: HealthState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ServiceHealth {
    pub fn new(healthy: HealthState) -> Self {
        Self {
            healthy,
            message: None,
        }
    }

    pub fn with_message(healthy: HealthState, message: impl Into<String>) -> Self {
        Self {
            healthy,
            message: Some(message.into()),
        }
    }
}

/// Capability contract for a supervised unit.
///
/// Implementations must uphold the polling contract: `start` and `stop`
/// return promptly (kicking off the transition in the background, e.g. on a
/// spawned task) and subsequent `status()` calls reflect the transition in
/// progress. A start/stop failure is reported by transitioning to
/// [`RunState::Errored`] with a message, never by panicking into the caller.
#[async_trait]
pub trait Service: Send + Sync {
    /// Stable identifier, unique within a supervisor.
    fn name(&self) -> &str;

    /// Current run state. Synchronous and side-effect-free; called on every
    /// status snapshot.
    fn status(&self) -> ServiceStatus;

    /// Current health. May suspend (e.g. ping a backing database); callers
    /// bound it with their own timeout.
    async fn health(&self) -> ServiceHealth;

    /// Begin transitioning to `Running`. Non-blocking initiation.
    fn start(&self);

    /// Begin transitioning to `Stopped`. Non-blocking initiation.
    fn stop(&self);
}
