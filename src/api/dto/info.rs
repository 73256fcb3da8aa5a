//! DTOs for the info endpoint.

use serde::Serialize;

/// Application metadata.
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub app: AppInfo,
}

#[derive(Debug, Serialize)]
pub struct AppInfo {
    pub name: String,
    pub version: String,
}

impl InfoResponse {
    /// Metadata of the running binary.
    pub fn current() -> Self {
        Self {
            app: AppInfo {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }
}
