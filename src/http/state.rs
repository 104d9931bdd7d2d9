//! Application state for the HTTP server.

use std::sync::Arc;

use crate::db::repository::ZoneRepository;
use crate::services::AnalysisPolicy;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for storage operations
    pub repository: Arc<dyn ZoneRepository>,
    /// Analyzer thresholds, loaded once at startup
    pub policy: Arc<AnalysisPolicy>,
}

impl AppState {
    /// Create a new application state with the given repository and policy.
    pub fn new(repository: Arc<dyn ZoneRepository>, policy: AnalysisPolicy) -> Self {
        Self {
            repository,
            policy: Arc::new(policy),
        }
    }
}
