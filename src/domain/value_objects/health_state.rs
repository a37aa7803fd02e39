//! HealthState value object
//! Live diagnostic of a service, independent of its run state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Health of a service as it reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthState {
    Healthy,
    Degraded,
    Unhealthy,
}

impl HealthState {
    /// Whether this health level satisfies a required minimum.
    /// `Healthy` meets any requirement, `Degraded` only a `Degraded` one,
    /// `Unhealthy` none.
    pub fn meets(self, required: HealthState) -> bool {
        match self {
            HealthState::Healthy => true,
            HealthState::Degraded => required == HealthState::Degraded,
            HealthState::Unhealthy => false,
        }
    }
}

impl fmt::Display for HealthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HealthState::Healthy => write!(f, "healthy"),
            HealthState::Degraded => write!(f, "degraded"),
            HealthState::Unhealthy => write!(f, "unhealthy"),
        }
    }
}

/// Fold a non-empty collection of service health states into one process
/// health. Any unhealthy service makes the process unhealthy; anything short
/// of all-healthy is degraded. Empty input is the caller's responsibility,
/// same as [`combine_run_states`](super::combine_run_states).
pub fn combine_health_states(states: &[HealthState]) -> HealthState {
    debug_assert!(!states.is_empty(), "empty input has no combined health");

    if states.iter().all(|s| *s == HealthState::Healthy) {
        HealthState::Healthy
    } else if states.iter().any(|s| *s == HealthState::Unhealthy) {
        HealthState::Unhealthy
    } else {
        HealthState::Degraded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use HealthState::*;

    #[test]
    fn test_all_healthy() {
        assert_eq!(combine_health_states(&[Healthy]), Healthy);
        assert_eq!(combine_health_states(&[Healthy, Healthy]), Healthy);
    }

    #[test]
    fn test_any_unhealthy_dominates() {
        assert_eq!(combine_health_states(&[Healthy, Unhealthy]), Unhealthy);
        assert_eq!(combine_health_states(&[Degraded, Unhealthy]), Unhealthy);
        assert_eq!(combine_health_states(&[Unhealthy]), Unhealthy);
    }

    #[test]
    fn test_otherwise_degraded() {
        assert_eq!(combine_health_states(&[Degraded]), Degraded);
        assert_eq!(combine_health_states(&[Healthy, Degraded]), Degraded);
    }

    #[test]
    fn test_meets_requirement() {
        assert!(Healthy.meets(Healthy));
        assert!(Healthy.meets(Degraded));
        assert!(Degraded.meets(Degraded));
        assert!(!Degraded.meets(Healthy));
        assert!(!Unhealthy.meets(Healthy));
        assert!(!Unhealthy.meets(Degraded));
    }

    #[test]
    fn test_display() {
        assert_eq!(Healthy.to_string(), "healthy");
        assert_eq!(Degraded.to_string(), "degraded");
        assert_eq!(Unhealthy.to_string(), "unhealthy");
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(serde_json::to_string(&Degraded).unwrap(), "\"degraded\"");
        assert_eq!(
            serde_json::from_str::<HealthState>("\"unhealthy\"").unwrap(),
            Unhealthy
        );
    }
}
