use super::{ComponentHealth, HealthIndicator};
use async_trait::async_trait;

/// Always-up indicator proving the process answers requests.
#[derive(Debug, Default, Clone, Copy)]
pub struct PingIndicator;

#[async_trait]
impl HealthIndicator for PingIndicator {
    fn name(&self) -> &str {
        "ping"
    }

    async fn health(&self) -> ComponentHealth {
        ComponentHealth::up()
    }
}
