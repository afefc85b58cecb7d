//! Shared application state for all routes.

use crate::config::AppConfig;
use crate::error::AppError;
use crate::store::DocumentStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    /// None when the store is not configured; data operations then fail
    /// predictably with `AppError::Unavailable`.
    pub store: Option<Arc<dyn DocumentStore>>,
}

impl AppState {
    pub fn new(config: AppConfig, store: Option<Arc<dyn DocumentStore>>) -> Self {
        Self { config, store }
    }

    /// The store handle, or an unavailability error when none is configured.
    pub fn store(&self) -> Result<&Arc<dyn DocumentStore>, AppError> {
        self.store
            .as_ref()
            .ok_or_else(|| AppError::Unavailable("document store is not configured".into()))
    }
}
