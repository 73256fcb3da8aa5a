//! Aggregation of all registered indicators into one report.

use super::{ComponentHealth, ComponentStatus, HealthIndicator};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Report served by the health endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct SystemHealth {
    pub status: ComponentStatus,
    pub components: BTreeMap<String, ComponentHealth>,
}

impl SystemHealth {
    pub fn is_up(&self) -> bool {
        self.status.is_up()
    }
}

/// Runs every registered indicator on each request.
///
/// The overall status is `UP` only when every component is `UP`.
#[derive(Clone, Default)]
pub struct CompositeHealth {
    indicators: Vec<Arc<dyn HealthIndicator>>,
}

impl CompositeHealth {
    pub fn new(indicators: Vec<Arc<dyn HealthIndicator>>) -> Self {
        Self { indicators }
    }

    /// Evaluates all indicators sequentially.
    pub async fn health(&self) -> SystemHealth {
        let mut components = BTreeMap::new();

        for indicator in &self.indicators {
            let health = indicator.health().await;
            components.insert(indicator.name().to_string(), health);
        }

        let all_up = components.values().all(|c| c.status.is_up());

        SystemHealth {
            status: ComponentStatus::from_healthy(all_up),
            components,
        }
    }
}
