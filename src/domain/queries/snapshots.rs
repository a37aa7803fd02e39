//! Process-level snapshot shapes
//! These are the wire format of the probe endpoint, serialized as-is.

use crate::domain::ports::{ServiceHealth, ServiceStatus};
use crate::domain::value_objects::{HealthState, RunState};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregated run state of the process plus every per-service report.
/// `BTreeMap` keeps serialization deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStatus {
    pub state: RunState,
    pub services: BTreeMap<String, ServiceStatus>,
}

/// Aggregated health of the process plus every per-service report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessHealth {
    pub healthy: HealthState,
    pub services: BTreeMap<String, ServiceHealth>,
}
