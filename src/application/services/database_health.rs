//! In-process health service checking the backing databases directly.

use crate::domain::health::HealthRecord;
use crate::domain::repositories::{
    DatabaseClient, HealthService, ServiceError, validate_database_name,
};
use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use tracing::warn;

/// Health service that checks a fixed set of databases for existence.
///
/// # Rules
///
/// - Missing database: detail `The database '<name>' does not exist.`
/// - Client error: detail is the error message
/// - Status is `UP` when no database produced a detail, `DOWN` otherwise
pub struct DatabaseHealthService<C: DatabaseClient + ?Sized> {
    client: Arc<C>,
    databases: BTreeSet<String>,
}

impl<C: DatabaseClient + ?Sized> DatabaseHealthService<C> {
    /// Creates a service checking `databases` through `client`.
    pub fn new<I, S>(client: Arc<C>, databases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            client,
            databases: databases.into_iter().map(Into::into).collect(),
        }
    }

    async fn check<'a, I>(&self, databases: I) -> HealthRecord
    where
        I: IntoIterator<Item = &'a String>,
    {
        let mut problems = BTreeMap::new();

        for database in databases {
            match self.client.db_exists(database).await {
                Ok(true) => {}
                Ok(false) => {
                    problems.insert(
                        database.clone(),
                        format!("The database '{}' does not exist.", database),
                    );
                }
                Err(e) => {
                    warn!("Health check of database '{}' failed: {}", database, e);
                    problems.insert(database.clone(), e.to_string());
                }
            }
        }

        HealthRecord::from_problems(problems)
    }
}

#[async_trait]
impl<C: DatabaseClient + ?Sized> HealthService for DatabaseHealthService<C> {
    async fn get_health(&self) -> Result<HealthRecord, ServiceError> {
        Ok(self.check(&self.databases).await)
    }

    async fn get_health_of_specific_databases(
        &self,
        databases: &BTreeSet<String>,
    ) -> Result<HealthRecord, ServiceError> {
        for database in databases {
            validate_database_name(database)?;
        }

        Ok(self.check(databases).await)
    }
}
