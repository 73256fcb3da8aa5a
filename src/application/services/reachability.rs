//! Database reachability probe.

use crate::domain::repositories::DatabaseClient;
use std::sync::Arc;
use tracing::{debug, warn};

/// Single existence check against a known database.
///
/// Never fails: client errors are logged and reported as unreachable.
/// Each call issues exactly one request, without retries.
#[derive(Clone)]
pub struct ReachabilityProbe {
    client: Arc<dyn DatabaseClient>,
    database: String,
}

impl ReachabilityProbe {
    pub fn new(client: Arc<dyn DatabaseClient>, database: impl Into<String>) -> Self {
        Self {
            client,
            database: database.into(),
        }
    }

    /// Returns `true` if the database answered and exists.
    pub async fn is_reachable(&self) -> bool {
        match self.client.db_exists(&self.database).await {
            Ok(true) => true,
            Ok(false) => {
                debug!("Database '{}' does not exist", self.database);
                false
            }
            Err(e) => {
                warn!("Reachability check of '{}' failed: {}", self.database, e);
                false
            }
        }
    }
}
