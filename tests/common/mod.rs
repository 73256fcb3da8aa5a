#![allow(dead_code)]

use async_trait::async_trait;
use health_aggregator::application::indicators::{
    CompositeHealth, HealthIndicator, PingIndicator, RestHealthIndicator,
};
use health_aggregator::application::services::{DatabaseHealthService, ReachabilityProbe};
use health_aggregator::domain::health::{HealthRecord, HealthStatus};
use health_aggregator::domain::repositories::{
    ClientError, DatabaseClient, HealthService, ServiceError,
};
use health_aggregator::state::AppState;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

pub const COMPONENT: &str = "SW360Rest";

/// Database client answering from a fixed table; unknown names do not exist.
pub struct StubDatabaseClient {
    answers: BTreeMap<String, Result<bool, ClientError>>,
}

impl StubDatabaseClient {
    pub fn new() -> Self {
        Self {
            answers: BTreeMap::new(),
        }
    }

    pub fn with(mut self, name: &str, answer: Result<bool, ClientError>) -> Self {
        self.answers.insert(name.to_string(), answer);
        self
    }

    /// Client for which `name` exists (or not).
    pub fn single(name: &str, exists: bool) -> Self {
        Self::new().with(name, Ok(exists))
    }

    /// Client whose every call fails.
    pub fn failing(name: &str) -> Self {
        Self::new().with(
            name,
            Err(ClientError::Transport("connection refused".to_string())),
        )
    }
}

#[async_trait]
impl DatabaseClient for StubDatabaseClient {
    async fn db_exists(&self, name: &str) -> Result<bool, ClientError> {
        self.answers.get(name).cloned().unwrap_or(Ok(false))
    }
}

/// Health service returning a canned record, or failing.
pub enum StubHealthService {
    Record(HealthRecord),
    Fault(String),
}

impl StubHealthService {
    pub fn status(status: HealthStatus) -> Self {
        Self::Record(HealthRecord::new(status, BTreeMap::new()))
    }

    pub fn down_with(database: &str, message: &str) -> Self {
        Self::Record(HealthRecord::new(
            HealthStatus::Down,
            BTreeMap::from([(database.to_string(), message.to_string())]),
        ))
    }

    fn answer(&self) -> Result<HealthRecord, ServiceError> {
        match self {
            Self::Record(record) => Ok(record.clone()),
            Self::Fault(message) => Err(ServiceError::Transport(message.clone())),
        }
    }
}

#[async_trait]
impl HealthService for StubHealthService {
    async fn get_health(&self) -> Result<HealthRecord, ServiceError> {
        self.answer()
    }

    async fn get_health_of_specific_databases(
        &self,
        databases: &BTreeSet<String>,
    ) -> Result<HealthRecord, ServiceError> {
        let mut record = self.answer()?;
        record.details.retain(|name, _| databases.contains(name));
        Ok(record)
    }
}

/// Builds handler state from a probe client and the service the indicator asks.
///
/// The `/backend` endpoints are served by an in-process service over the
/// same client checking `sw360db`.
pub fn create_test_state(client: StubDatabaseClient, service: StubHealthService) -> AppState {
    let client: Arc<StubDatabaseClient> = Arc::new(client);

    let probe_client: Arc<dyn DatabaseClient> = client.clone();
    let indicator = RestHealthIndicator::new(
        COMPONENT,
        ReachabilityProbe::new(probe_client, "sw360db"),
        Arc::new(service),
    );

    let indicators: Vec<Arc<dyn HealthIndicator>> =
        vec![Arc::new(indicator), Arc::new(PingIndicator)];
    let backend = Arc::new(DatabaseHealthService::new(client, ["sw360db"]));

    AppState::new(Arc::new(CompositeHealth::new(indicators)), backend)
}
