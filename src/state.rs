//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use crate::config::Config;
use crate::content::ContentRepository;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Read-only accessor for the content tree
    content: ContentRepository,

    /// Application configuration
    config: Config,
}

impl AppState {
    /// Create a new application state from configuration
    pub fn new(config: Config) -> Self {
        let content = ContentRepository::new(config.content.root.clone(), config.content.layout);
        Self {
            inner: Arc::new(AppStateInner { content, config }),
        }
    }

    /// Get a reference to the content repository
    pub fn content(&self) -> &ContentRepository {
        &self.inner.content
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
