//! Application state for the Term Results Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::store::StudentStore;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers:
/// the loaded school configuration and the student store.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    store: Arc<dyn StudentStore>,
}

impl AppState {
    /// Creates a new application state from a configuration loader and
    /// a student store.
    pub fn new(config: ConfigLoader, store: Arc<dyn StudentStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns a reference to the student store.
    pub fn store(&self) -> &dyn StudentStore {
        self.store.as_ref()
    }
}
