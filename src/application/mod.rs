pub mod options;
pub mod supervisor;

pub use options::SupervisorOptions;
pub use supervisor::Supervisor;
