use std::sync::Arc;

use crate::advisory::orchestrator::AdvisoryTeam;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The advisory pipeline. Owns the run history, so every request sees the same log.
    pub team: Arc<AdvisoryTeam>,
}
