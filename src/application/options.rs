//! Supervisor configuration surface

use serde::Deserialize;
use std::time::Duration;

/// Options consumed by the [`Supervisor`](super::Supervisor). Deserializable
/// so hosts can lift it straight out of their own config files.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SupervisorOptions {
    /// How long to wait before treating a non-responsive service as
    /// unhealthy, in milliseconds.
    pub health_response_time_ms: u64,

    /// Port for the probe listener. Omit to disable the HTTP endpoint.
    #[serde(default)]
    pub health_port: Option<u16>,
}

impl SupervisorOptions {
    pub fn new(health_response_time_ms: u64) -> Self {
        Self {
            health_response_time_ms,
            health_port: None,
        }
    }

    /// Builder method to set the probe listener port.
    pub fn with_health_port(mut self, port: u16) -> Self {
        self.health_port = Some(port);
        self
    }

    pub fn health_response_time(&self) -> Duration {
        Duration::from_millis(self.health_response_time_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_port_defaults_off() {
        let options: SupervisorOptions =
            serde_json::from_str(r#"{ "health_response_time_ms": 500 }"#).unwrap();
        assert_eq!(options.health_response_time(), Duration::from_millis(500));
        assert_eq!(options.health_port, None);
    }

    #[test]
    fn test_builder() {
        let options = SupervisorOptions::new(1000).with_health_port(8086);
        assert_eq!(options.health_port, Some(8086));
    }
}
