//! Collaborator trait definitions for the domain layer.
//!
//! The health checks talk to the outside world only through these traits.
//! Concrete implementations live in `crate::infrastructure` and
//! `crate::application::services`.
//!
//! # Available Contracts
//!
//! - [`DatabaseClient`] - Existence check against a named database
//! - [`HealthService`] - Structured health report of the backing databases
//!
//! # Testing
//!
//! Mock implementations are auto-generated via `mockall` for unit tests.

pub mod database_client;
pub mod health_service;

pub use database_client::{ClientError, DatabaseClient, validate_database_name};
pub use health_service::{HealthService, ServiceError};

#[cfg(test)]
pub use database_client::MockDatabaseClient;
#[cfg(test)]
pub use health_service::MockHealthService;
