//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod backend;
pub mod health;
pub mod info;

pub use backend::{backend_databases_handler, backend_health_handler};
pub use health::health_handler;
pub use info::info_handler;
