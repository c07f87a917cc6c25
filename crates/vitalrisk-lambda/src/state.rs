use std::sync::Arc;

use vitalrisk_bedrock::insight::InsightClient;

/// Shared application state, injected into all route handlers via Axum state.
pub struct AppState<C> {
    pub insights: Arc<C>,
}

impl<C: InsightClient> AppState<C> {
    pub fn new(insights: C) -> Self {
        Self {
            insights: Arc::new(insights),
        }
    }
}

// Cloning only bumps the `Arc`, so `C` itself need not be `Clone`.
impl<C> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            insights: Arc::clone(&self.insights),
        }
    }
}
