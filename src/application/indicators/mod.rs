//! Health indicators and their aggregation.
//!
//! A [`HealthIndicator`] is any provider of a status plus detail map. The
//! HTTP layer never talks to indicators directly: it asks a
//! [`CompositeHealth`] for the combined report and maps its status to
//! `200 OK` or `503 Service Unavailable`.
//!
//! # Indicators
//!
//! - [`RestHealthIndicator`] - Database reachability merged with service health
//! - [`PingIndicator`] - Liveness of the process itself

mod composite;
mod ping;
mod rest;

pub use composite::{CompositeHealth, SystemHealth};
pub use ping::PingIndicator;
pub use rest::{
    AggregateOutcome, DB_DETAIL_PREFIX, DETAIL_DB_REACHABLE, DETAIL_ERROR, DETAIL_SERVICE_STATUS,
    RestHealthIndicator, SERVICE_UNREACHABLE, ServiceOutcome,
};

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Map, Value};

/// Status of one indicator as exposed over HTTP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ComponentStatus {
    Up,
    Down,
}

impl ComponentStatus {
    pub fn from_healthy(healthy: bool) -> Self {
        if healthy { Self::Up } else { Self::Down }
    }

    pub fn is_up(&self) -> bool {
        *self == Self::Up
    }
}

/// Result of a single indicator: status plus flat detail map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentHealth {
    pub status: ComponentStatus,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub details: Map<String, Value>,
}

impl ComponentHealth {
    pub fn new(status: ComponentStatus, details: Map<String, Value>) -> Self {
        Self { status, details }
    }

    /// Healthy result without details.
    pub fn up() -> Self {
        Self::new(ComponentStatus::Up, Map::new())
    }
}

/// Polymorphic health-check provider.
///
/// Implementations must be independent across calls: every invocation
/// re-checks its dependencies and shares no mutable state with other calls.
#[async_trait]
pub trait HealthIndicator: Send + Sync {
    /// Key under which the result appears in `components`.
    fn name(&self) -> &str;

    /// Computes the current health.
    async fn health(&self) -> ComponentHealth;
}
