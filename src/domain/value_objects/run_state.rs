//! RunState value object
//! Lifecycle state of a supervised service, and the fold that combines many
//! service states into one process-level state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The lifecycle state of a service (or of the whole process).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RunState {
    /// Not running; the initial state.
    #[default]
    Stopped,

    /// A start has been requested and is in progress.
    Starting,

    /// Serving normally.
    Running,

    /// A stop has been requested and is in progress.
    Stopping,

    /// A start or stop failed; terminal until the process restarts.
    Errored,
}

impl RunState {
    /// Check if a start request is meaningful in this state.
    /// Starting an already starting/running service is a guarded no-op.
    pub fn can_start(self) -> bool {
        !matches!(self, RunState::Starting | RunState::Running)
    }

    /// Check if a stop request is meaningful in this state.
    /// Stopping a stopping/stopped/errored service is a guarded no-op.
    pub fn can_stop(self) -> bool {
        matches!(self, RunState::Starting | RunState::Running)
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunState::Stopped => write!(f, "stopped"),
            RunState::Starting => write!(f, "starting"),
            RunState::Running => write!(f, "running"),
            RunState::Stopping => write!(f, "stopping"),
            RunState::Errored => write!(f, "errored"),
        }
    }
}

/// Fold a non-empty collection of service states into one process state.
///
/// Precedence: a single errored service dominates over services still in
/// transition so operators see failures promptly, and `stopping` outranks
/// `starting` because a process actively shutting down must not be reported
/// as coming up.
///
/// The empty case is the caller's problem: an empty registry reports the
/// supervisor's target state, never a folded value.
pub fn combine_run_states(states: &[RunState]) -> RunState {
    debug_assert!(!states.is_empty(), "empty input has no combined state");

    if states.iter().all(|s| *s == RunState::Running) {
        RunState::Running
    } else if states.iter().all(|s| *s == RunState::Stopped) {
        RunState::Stopped
    } else if states.iter().any(|s| *s == RunState::Errored) {
        RunState::Errored
    } else if states.iter().any(|s| *s == RunState::Stopping) {
        RunState::Stopping
    } else {
        RunState::Starting
    }
}
