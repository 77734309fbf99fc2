use std::sync::{Arc, Mutex};

use crate::analysis::Analyzer;
use crate::config::Config;
use crate::tracker::ApplicationTracker;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Wraps the advice writer chosen at startup (template or LLM-backed).
    pub analyzer: Analyzer,
    pub tracker: Arc<Mutex<ApplicationTracker>>,
}

impl AppState {
    pub fn new(config: Config, analyzer: Analyzer) -> Self {
        Self {
            config,
            analyzer,
            tracker: Arc::new(Mutex::new(ApplicationTracker::new())),
        }
    }
}
