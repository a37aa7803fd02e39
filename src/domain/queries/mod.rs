pub mod snapshots;

pub use snapshots::{ProcessHealth, ProcessStatus};
