//! Infrastructure layer for external integrations.
//!
//! This layer implements the collaborator traits defined by the domain layer
//! on top of HTTP.
//!
//! # Modules
//!
//! - [`couchdb`] - CouchDB-backed [`crate::domain::repositories::DatabaseClient`]
//! - [`remote_health`] - Remote [`crate::domain::repositories::HealthService`]
//! - [`http`] - Shared outbound HTTP client construction

pub mod couchdb;
pub mod http;
pub mod remote_health;

pub use couchdb::CouchDbClient;
pub use remote_health::RemoteHealthService;
