//! Health service contract.

use crate::domain::health::HealthRecord;
use crate::domain::repositories::ClientError;
use async_trait::async_trait;
use std::collections::BTreeSet;

/// Errors raised while obtaining a [`HealthRecord`].
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Health service request failed: {0}")]
    Transport(String),

    #[error("Health service responded with status {0}")]
    UnexpectedStatus(u16),

    #[error("Invalid health service response: {0}")]
    Decode(String),

    #[error("Invalid health service URL: {0}")]
    InvalidUrl(String),

    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Source of structured health records for the backing databases.
///
/// Failures are propagated to the caller, which decides how to report them.
///
/// # Implementations
///
/// - [`crate::application::services::DatabaseHealthService`] - In-process checks
/// - [`crate::infrastructure::remote_health::RemoteHealthService`] - Remote backend over HTTP
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HealthService: Send + Sync {
    /// Reports the health of every database the service knows about.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] if the health could not be determined at all.
    async fn get_health(&self) -> Result<HealthRecord, ServiceError>;

    /// Reports the health of the given databases only.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Client`] for invalid database names and other
    /// [`ServiceError`] variants if the call fails.
    async fn get_health_of_specific_databases(
        &self,
        databases: &BTreeSet<String>,
    ) -> Result<HealthRecord, ServiceError>;
}
