//! Application layer: health checks built on the domain contracts.
//!
//! # Modules
//!
//! - [`services`] - Reachability probe and in-process database health service
//! - [`indicators`] - Health indicators and their aggregation into one report

pub mod indicators;
pub mod services;
