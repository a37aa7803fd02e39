pub mod error;
pub mod ports;
pub mod queries;
pub mod value_objects;

pub use error::{Result, SupervisorError};
pub use ports::{Service, ServiceHealth, ServiceStatus};
pub use queries::{ProcessHealth, ProcessStatus};
pub use value_objects::{combine_health_states, combine_run_states, HealthState, RunState};
