//! Application state.

use std::sync::Arc;

use cqa_scorer::ContinuityScorer;

use crate::config::ApiConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub scorer: Arc<ContinuityScorer>,
}

impl AppState {
    /// Create new application state.
    pub fn new(config: ApiConfig) -> Self {
        let scorer = ContinuityScorer::new().with_config(config.scorer);
        Self {
            config,
            scorer: Arc::new(scorer),
        }
    }
}
