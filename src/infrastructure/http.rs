//! Outbound HTTP client shared by all infrastructure clients.

use anyhow::{Context, Result};
use std::time::Duration;

/// Builds the pooled HTTP client used for database and health-service calls.
///
/// The timeout applies to every request; it is the only timeout in the
/// health check chain.
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialized.
pub fn build_client(timeout: Duration) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to build HTTP client")
}
