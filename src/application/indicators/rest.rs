//! Aggregation of database reachability and service health.

use super::{ComponentHealth, ComponentStatus, HealthIndicator};
use crate::application::services::ReachabilityProbe;
use crate::domain::health::HealthRecord;
use crate::domain::repositories::HealthService;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{debug, warn};

pub const DETAIL_DB_REACHABLE: &str = "isDbReachable";
pub const DETAIL_SERVICE_STATUS: &str = "serviceStatus";
pub const DETAIL_ERROR: &str = "error";
pub const DB_DETAIL_PREFIX: &str = "db.";

/// `serviceStatus` value used when the health service call failed.
pub const SERVICE_UNREACHABLE: &str = "UNREACHABLE";

/// What the health service answered.
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceOutcome {
    Reported(HealthRecord),
    Faulted(String),
}

/// Combined result of one health check. Recomputed on every call.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateOutcome {
    pub db_reachable: bool,
    pub service: ServiceOutcome,
}

impl AggregateOutcome {
    /// Healthy iff the database is reachable and the service reported `UP`.
    pub fn is_healthy(&self) -> bool {
        self.db_reachable && matches!(&self.service, ServiceOutcome::Reported(r) if r.is_up())
    }

    /// Value of the `serviceStatus` detail.
    pub fn service_status(&self) -> &'static str {
        match &self.service {
            ServiceOutcome::Reported(record) => record.status.as_str(),
            ServiceOutcome::Faulted(_) => SERVICE_UNREACHABLE,
        }
    }

    /// Flat detail map: `isDbReachable`, `serviceStatus`, one `db.<name>` entry
    /// per reported database problem, and `error` when the service call failed.
    pub fn details(&self) -> Map<String, Value> {
        let mut details = Map::new();
        details.insert(DETAIL_DB_REACHABLE.to_string(), Value::Bool(self.db_reachable));
        details.insert(
            DETAIL_SERVICE_STATUS.to_string(),
            Value::from(self.service_status()),
        );

        match &self.service {
            ServiceOutcome::Reported(record) => {
                for (database, message) in &record.details {
                    details.insert(
                        format!("{DB_DETAIL_PREFIX}{database}"),
                        Value::from(message.as_str()),
                    );
                }
            }
            ServiceOutcome::Faulted(error) => {
                details.insert(DETAIL_ERROR.to_string(), Value::from(error.as_str()));
            }
        }

        details
    }
}

/// Health indicator for the REST layer.
///
/// Probes the main database and asks the health service for its report,
/// then merges both. Service failures are caught here and never reach the
/// HTTP layer.
pub struct RestHealthIndicator {
    name: String,
    probe: ReachabilityProbe,
    service: Arc<dyn HealthService>,
}

impl RestHealthIndicator {
    pub fn new(
        name: impl Into<String>,
        probe: ReachabilityProbe,
        service: Arc<dyn HealthService>,
    ) -> Self {
        Self {
            name: name.into(),
            probe,
            service,
        }
    }

    /// Runs both checks once, in order, and combines them.
    pub async fn check(&self) -> AggregateOutcome {
        let db_reachable = self.probe.is_reachable().await;

        let service = match self.service.get_health().await {
            Ok(record) => ServiceOutcome::Reported(record),
            Err(e) => {
                warn!("Health service unreachable: {}", e);
                ServiceOutcome::Faulted(e.to_string())
            }
        };

        let outcome = AggregateOutcome {
            db_reachable,
            service,
        };
        debug!(
            healthy = outcome.is_healthy(),
            db_reachable,
            service_status = outcome.service_status(),
            "Health check completed"
        );

        outcome
    }
}

#[async_trait]
impl HealthIndicator for RestHealthIndicator {
    fn name(&self) -> &str {
        &self.name
    }

    async fn health(&self) -> ComponentHealth {
        let outcome = self.check().await;
        ComponentHealth::new(
            ComponentStatus::from_healthy(outcome.is_healthy()),
            outcome.details(),
        )
    }
}
