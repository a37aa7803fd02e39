//! Supervisor orchestration
//! Registry of supervised services plus the process-level operations:
//! register, start, stop, status and health snapshots, and the probe
//! listener lifecycle.

use crate::adapters::rest::{build_router, serve_probes};
use crate::application::options::SupervisorOptions;
use crate::domain::ports::{Service, ServiceHealth};
use crate::domain::queries::{ProcessHealth, ProcessStatus};
use crate::domain::value_objects::{
    combine_health_states, combine_run_states, HealthState, RunState,
};
use crate::domain::{Result, SupervisorError};
use std::collections::{BTreeMap, HashMap};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, RwLock, Weak};
use std::time::Duration;
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

/// How often the drain watcher re-checks whether every service has stopped.
const DRAIN_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Reported for a service whose health call did not settle within the bound.
const HEALTH_TIMEOUT_MESSAGE: &str = "timeout waiting to evaluate health";

/// In-process supervisor over a named set of services.
///
/// Owns no service state: every snapshot queries the services' self-reported
/// status, and `start`/`stop` fire transition requests without awaiting
/// completion. Callers discover progress by polling [`Supervisor::status`]
/// and [`Supervisor::health`], or by watching the probe endpoint.
///
/// Installs no signal handlers; a host that wants graceful drain on SIGTERM
/// calls [`Supervisor::stop`] from its own handler.
pub struct Supervisor {
    options: SupervisorOptions,
    services: RwLock<HashMap<String, Arc<dyn Service>>>,
    target_state: RwLock<RunState>,
    probe_listener: Mutex<Option<CancellationToken>>,
    // Needed to hand the probe router an owning handle from &self methods.
    weak_self: Weak<Supervisor>,
}

impl Supervisor {
    pub fn new(options: SupervisorOptions) -> Arc<Self> {
        Arc::new_cyclic(|weak_self| Self {
            options,
            services: RwLock::new(HashMap::new()),
            target_state: RwLock::new(RunState::Stopped),
            probe_listener: Mutex::new(None),
            weak_self: weak_self.clone(),
        })
    }

    /// Register a service under its reported name.
    ///
    /// Fails if the name is taken; duplicate names are a configuration error
    /// the caller must not continue past. When the supervisor has already
    /// been started, the new service is started immediately (guarded, like
    /// any other start request).
    pub fn register_service(&self, service: Arc<dyn Service>) -> Result<()> {
        let name = service.name().to_string();
        {
            let mut services = self.services.write().expect("registry lock poisoned");
            if services.contains_key(&name) {
                return Err(SupervisorError::DuplicateService(name));
            }
            services.insert(name.clone(), service.clone());
        }
        debug!(service = %name, "registered service");

        if self.target_state() == RunState::Running {
            self.start_service(service.as_ref());
        }
        Ok(())
    }

    /// Request a start of every registered service and ensure the probe
    /// listener is up. Returns immediately; services report their own
    /// progress through [`Supervisor::status`].
    pub fn start(&self) {
        *self.target_state.write().expect("target lock poisoned") = RunState::Running;

        let services = self.service_snapshot();
        debug!(count = services.len(), "starting all registered services");
        for service in &services {
            self.start_service(service.as_ref());
        }

        self.ensure_probe_listener();
    }

    /// Request a stop of every registered service. Returns immediately; the
    /// probe listener stays up until every service reports stopped, so
    /// orchestrators polling during shutdown keep getting answers.
    pub fn stop(&self) {
        *self.target_state.write().expect("target lock poisoned") = RunState::Stopped;

        let services = self.service_snapshot();
        debug!(count = services.len(), "stopping all registered services");
        for service in &services {
            self.stop_service(service.as_ref());
        }

        self.arm_probe_teardown();
    }

    /// Synchronous status snapshot: every service's reported state, folded
    /// into one process state. An empty registry reports the target state.
    pub fn status(&self) -> ProcessStatus {
        let services = self.service_snapshot();
        if services.is_empty() {
            return ProcessStatus {
                state: self.target_state(),
                services: BTreeMap::new(),
            };
        }

        let mut entries = BTreeMap::new();
        for service in services {
            entries.insert(service.name().to_string(), service.status());
        }
        let states: Vec<RunState> = entries.values().map(|s| s.state).collect();
        ProcessStatus {
            state: combine_run_states(&states),
            services: entries,
        }
    }

    /// Health snapshot: every service queried concurrently, each bounded by
    /// the configured response time. A service that does not settle in time
    /// reports unhealthy with a timeout message; one service's failure never
    /// prevents collecting the others. An empty registry reports healthy.
    pub async fn health(&self) -> ProcessHealth {
        let services = self.service_snapshot();
        if services.is_empty() {
            return ProcessHealth {
                healthy: HealthState::Healthy,
                services: BTreeMap::new(),
            };
        }

        let bound = self.options.health_response_time();
        let queries: Vec<_> = services
            .into_iter()
            .map(|service| {
                let name = service.name().to_string();
                let handle = tokio::spawn(async move {
                    match timeout(bound, service.health()).await {
                        Ok(health) => health,
                        Err(_) => ServiceHealth::with_message(
                            HealthState::Unhealthy,
                            HEALTH_TIMEOUT_MESSAGE,
                        ),
                    }
                });
                (name, handle)
            })
            .collect();

        let mut entries = BTreeMap::new();
        for (name, handle) in queries {
            let health = match handle.await {
                Ok(health) => health,
                Err(e) => {
                    error!(service = %name, error = %e, "health query failed");
                    ServiceHealth::with_message(HealthState::Unhealthy, "health query failed")
                }
            };
            entries.insert(name, health);
        }

        let states: Vec<HealthState> = entries.values().map(|h| h.healthy).collect();
        ProcessHealth {
            healthy: combine_health_states(&states),
            services: entries,
        }
    }

    fn start_service(&self, service: &dyn Service) {
        let state = service.status().state;
        if !state.can_start() {
            warn!(
                service = %service.name(),
                state = %state,
                "start requested for service already in transition, ignoring"
            );
            return;
        }
        debug!(service = %service.name(), "requesting service start");
        service.start();
    }

    fn stop_service(&self, service: &dyn Service) {
        let state = service.status().state;
        if !state.can_stop() {
            warn!(
                service = %service.name(),
                state = %state,
                "stop requested for service already settled, ignoring"
            );
            return;
        }
        debug!(service = %service.name(), "requesting service stop");
        service.stop();
    }

    /// Start the probe listener if configured and not already running.
    fn ensure_probe_listener(&self) {
        let Some(port) = self.options.health_port else {
            return;
        };
        let Some(supervisor) = self.weak_self.upgrade() else {
            return;
        };

        let mut listener = self.probe_listener.lock().expect("listener lock poisoned");
        if listener.is_some() {
            return;
        }

        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let token = CancellationToken::new();
        let shutdown = token.clone();
        let router = build_router(supervisor);
        tokio::spawn(async move {
            if let Err(e) = serve_probes(addr, router, shutdown).await {
                error!(%addr, error = %e, "probe listener failed");
            }
        });
        *listener = Some(token);
    }

    /// Watch for quiescence after a stop request and release the probe
    /// socket once every service reports stopped. Stands down if the
    /// supervisor is started again mid-drain, or if a service errors (the
    /// listener then stays up to keep reporting the failure).
    fn arm_probe_teardown(&self) {
        if self
            .probe_listener
            .lock()
            .expect("listener lock poisoned")
            .is_none()
        {
            return;
        }
        let Some(supervisor) = self.weak_self.upgrade() else {
            return;
        };

        tokio::spawn(async move {
            loop {
                tokio::time::sleep(DRAIN_POLL_INTERVAL).await;
                if supervisor.target_state() != RunState::Stopped {
                    debug!("start requested mid-drain, keeping probe listener");
                    return;
                }
                let status = supervisor.status();
                if status.state == RunState::Errored {
                    let failed: Vec<&String> = status
                        .services
                        .iter()
                        .filter(|(_, s)| s.state == RunState::Errored)
                        .map(|(name, _)| name)
                        .collect();
                    error!(services = ?failed, "service failed during drain, keeping probe listener");
                    return;
                }
                if status
                    .services
                    .values()
                    .all(|s| s.state == RunState::Stopped)
                {
                    break;
                }
            }

            let mut listener = supervisor
                .probe_listener
                .lock()
                .expect("listener lock poisoned");
            // A start may have raced the final poll; only tear down when the
            // intent is still to stay stopped.
            if supervisor.target_state() != RunState::Stopped {
                return;
            }
            if let Some(token) = listener.take() {
                token.cancel();
                info!("process quiesced, probe listener released");
            }
        });
    }

    fn service_snapshot(&self) -> Vec<Arc<dyn Service>> {
        self.services
            .read()
            .expect("registry lock poisoned")
            .values()
            .cloned()
            .collect()
    }

    fn target_state(&self) -> RunState {
        *self.target_state.read().expect("target lock poisoned")
    }
}
