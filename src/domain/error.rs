//! Domain-level errors
//! Configuration mistakes the caller must not continue past, not runtime
//! service failures (those surface through the services' own reported state).

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SupervisorError {
    #[error("Service '{0}' already registered")]
    DuplicateService(String),
}

pub type Result<T> = std::result::Result<T, SupervisorError>;
