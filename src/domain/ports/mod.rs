pub mod service;

pub use service::{Service, ServiceHealth, ServiceStatus};
