//! Health status and record reported by the health service.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// State of a subsystem as reported by the subsystem itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HealthStatus {
    Up,
    Down,
    #[default]
    Unknown,
}

impl HealthStatus {
    /// Wire name of the status (`UP`, `DOWN`, `UNKNOWN`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "UP",
            Self::Down => "DOWN",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status plus a per-database detail message.
///
/// Created fresh for every query. Keys are database names, values are
/// human-readable messages describing what is wrong with that database.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthRecord {
    pub status: HealthStatus,
    #[serde(default)]
    pub details: BTreeMap<String, String>,
}

impl HealthRecord {
    pub fn new(status: HealthStatus, details: BTreeMap<String, String>) -> Self {
        Self { status, details }
    }

    /// A healthy record with no details.
    pub fn up() -> Self {
        Self::new(HealthStatus::Up, BTreeMap::new())
    }

    /// Builds a record whose status follows from the collected problems:
    /// `UP` when there are none, `DOWN` otherwise.
    pub fn from_problems(problems: BTreeMap<String, String>) -> Self {
        let status = if problems.is_empty() {
            HealthStatus::Up
        } else {
            HealthStatus::Down
        };
        Self::new(status, problems)
    }

    pub fn is_up(&self) -> bool {
        self.status == HealthStatus::Up
    }
}
