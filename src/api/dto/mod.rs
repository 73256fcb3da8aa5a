//! Data Transfer Objects for API responses.
//!
//! Health reports serialize [`crate::application::indicators::SystemHealth`]
//! directly; the types here cover the remaining endpoints.

pub mod info;
