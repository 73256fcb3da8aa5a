//! Health check services for the application layer.

pub mod database_health;
pub mod reachability;

pub use database_health::DatabaseHealthService;
pub use reachability::ReachabilityProbe;
