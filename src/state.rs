use std::sync::Arc;

use crate::application::indicators::CompositeHealth;
use crate::domain::repositories::HealthService;

/// Shared handler state. Holds only immutable handles, so concurrent
/// health requests never share mutable state.
#[derive(Clone)]
pub struct AppState {
    /// All registered indicators, evaluated per request.
    pub health: Arc<CompositeHealth>,
    /// Health service exposed on the `/backend` endpoints.
    pub backend: Arc<dyn HealthService>,
}

impl AppState {
    pub fn new(health: Arc<CompositeHealth>, backend: Arc<dyn HealthService>) -> Self {
        Self { health, backend }
    }
}
