//! Health service backed by a remote health backend.

use crate::domain::health::HealthRecord;
use crate::domain::repositories::{HealthService, ServiceError};
use async_trait::async_trait;
use reqwest::{Client, Response};
use std::collections::BTreeSet;
use tracing::debug;
use url::Url;

/// Calls the health backend's HTTP endpoints:
///
/// - `GET  {base}/backend/health`
/// - `POST {base}/backend/health/databases` with a JSON array of names
///
/// Both respond with a [`HealthRecord`] document.
pub struct RemoteHealthService {
    http: Client,
    base_url: Url,
}

impl RemoteHealthService {
    /// Creates a client for the health backend at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::InvalidUrl`] if the URL cannot be parsed or
    /// cannot carry a path.
    pub fn new(http: Client, base_url: &str) -> Result<Self, ServiceError> {
        let url =
            Url::parse(base_url).map_err(|e| ServiceError::InvalidUrl(format!("{base_url}: {e}")))?;

        if url.cannot_be_a_base() {
            return Err(ServiceError::InvalidUrl(base_url.to_string()));
        }

        Ok(Self {
            http,
            base_url: url,
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn read_record(response: Response) -> Result<HealthRecord, ServiceError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::UnexpectedStatus(status.as_u16()));
        }

        response
            .json::<HealthRecord>()
            .await
            .map_err(|e| ServiceError::Decode(e.to_string()))
    }
}

#[async_trait]
impl HealthService for RemoteHealthService {
    async fn get_health(&self) -> Result<HealthRecord, ServiceError> {
        let url = self.endpoint(&["backend", "health"]);
        debug!("Requesting health from {}", url);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        Self::read_record(response).await
    }

    async fn get_health_of_specific_databases(
        &self,
        databases: &BTreeSet<String>,
    ) -> Result<HealthRecord, ServiceError> {
        let url = self.endpoint(&["backend", "health", "databases"]);
        debug!("Requesting health of {:?} from {}", databases, url);

        let response = self
            .http
            .post(url)
            .json(databases)
            .send()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        Self::read_record(response).await
    }
}
