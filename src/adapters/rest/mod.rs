//! HTTP probe driving adapter
//!
//! Exposes the supervisor's snapshots over two read-only routes so an
//! orchestrator can poll liveness (`/healthz`) and readiness (`/readyz`).

pub mod handlers;
pub mod router;
pub mod server;

pub use router::build_router;
pub use server::serve_probes;
