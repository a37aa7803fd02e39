pub mod health_state;
pub mod run_state;

pub use health_state::{combine_health_states, HealthState};
pub use run_state::{combine_run_states, RunState};
