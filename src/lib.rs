//! In-process service supervisor.
//!
//! Embeds in a long-running daemon that bundles several sub-services (a
//! connection pool, a queue consumer, an HTTP API, ...), drives their
//! start/stop transitions, and folds their states into one process-level
//! answer an orchestrator can poll over `/healthz` and `/readyz`.
//!
//! Start/stop requests are fire-and-forget: services report their own
//! progress and the [`Supervisor`] discovers it by polling, so a slow
//! dependency never blocks the caller.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod readiness;

pub use application::{Supervisor, SupervisorOptions};
pub use domain::error::{Result, SupervisorError};
pub use domain::ports::{Service, ServiceHealth, ServiceStatus};
pub use domain::queries::{ProcessHealth, ProcessStatus};
pub use domain::value_objects::{
    combine_health_states, combine_run_states, HealthState, RunState,
};
pub use readiness::wait_until_ready;
