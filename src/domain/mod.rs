//! Domain layer containing health entities and collaborator contracts.
//!
//! This module is independent of HTTP and of any concrete database client.
//!
//! # Architecture
//!
//! - [`health`] - Service-reported health status and record
//! - [`repositories`] - Trait seams for the database client and health service
//!
//! # Check Flow
//!
//! 1. [`repositories::DatabaseClient`] answers whether a named database exists
//! 2. [`repositories::HealthService`] reports a [`health::HealthRecord`]
//! 3. [`crate::application::indicators`] merges both into an aggregate outcome

pub mod health;
pub mod repositories;
