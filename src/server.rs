//! HTTP server initialization and runtime setup.
//!
//! Builds the database client, health services and indicators from the
//! configuration, then runs the Axum server until shutdown.

use crate::application::indicators::{
    CompositeHealth, HealthIndicator, PingIndicator, RestHealthIndicator,
};
use crate::application::services::{DatabaseHealthService, ReachabilityProbe};
use crate::config::Config;
use crate::domain::repositories::{DatabaseClient, HealthService};
use crate::infrastructure::http::build_client;
use crate::infrastructure::{CouchDbClient, RemoteHealthService};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Collaborators wired from a [`Config`].
///
/// Shared by the HTTP server and the `healthctl` binary.
pub struct Components {
    pub couchdb: Arc<CouchDbClient>,
    /// In-process health service over the configured databases.
    pub backend: Arc<DatabaseHealthService<CouchDbClient>>,
    pub indicator: Arc<RestHealthIndicator>,
}

impl Components {
    /// Wires all collaborators.
    ///
    /// The indicator asks the remote health service when `HEALTH_SERVICE_URL`
    /// is set, and the in-process one otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built or a URL is invalid.
    pub fn build(config: &Config) -> Result<Self> {
        let http = build_client(config.request_timeout())?;

        let mut couchdb = CouchDbClient::new(http.clone(), &config.couchdb_url)
            .context("Failed to create CouchDB client")?;
        if let Some((user, password)) = &config.couchdb_credentials {
            couchdb = couchdb.with_credentials(user.as_str(), password.as_str());
        }
        let couchdb = Arc::new(couchdb);

        let backend = Arc::new(DatabaseHealthService::new(
            couchdb.clone(),
            config.health_databases.iter().cloned(),
        ));

        let service: Arc<dyn HealthService> = match &config.health_service_url {
            Some(url) => {
                tracing::info!("Using remote health service at {}", url);
                Arc::new(
                    RemoteHealthService::new(http, url)
                        .context("Failed to create remote health service client")?,
                )
            }
            None => {
                tracing::info!("Using in-process health service");
                backend.clone()
            }
        };

        let probe_client: Arc<dyn DatabaseClient> = couchdb.clone();
        let probe = ReachabilityProbe::new(probe_client, config.couchdb_database.clone());
        let indicator = Arc::new(RestHealthIndicator::new(
            config.component_name.clone(),
            probe,
            service,
        ));

        Ok(Self {
            couchdb,
            backend,
            indicator,
        })
    }

    /// Handler state with the REST indicator and a ping indicator registered.
    pub fn into_state(self) -> AppState {
        let indicators: Vec<Arc<dyn HealthIndicator>> =
            vec![self.indicator, Arc::new(PingIndicator)];

        AppState::new(Arc::new(CompositeHealth::new(indicators)), self.backend)
    }
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - Components cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = Components::build(&config)?.into_state();

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl+C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
