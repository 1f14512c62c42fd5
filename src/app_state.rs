//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::persistence::SummaryStore;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Data-access layer for summary records.
    pub store: Arc<dyn SummaryStore>,
    /// Deployment environment name reported by `/ping`.
    pub environment: Arc<str>,
    /// Whether the service runs under a test harness.
    pub testing: bool,
}

impl AppState {
    /// Creates state around `store` with the given environment metadata.
    #[must_use]
    pub fn new(store: Arc<dyn SummaryStore>, environment: &str, testing: bool) -> Self {
        Self {
            store,
            environment: Arc::from(environment),
            testing,
        }
    }
}
