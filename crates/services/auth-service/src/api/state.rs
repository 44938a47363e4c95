//! Application state for dependency injection.

use std::sync::Arc;

use crate::repository::UserDirectory;
use crate::service::CredentialsProvider;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn CredentialsProvider>,
    pub directory: Arc<dyn UserDirectory>,
}

impl AppState {
    /// Create new app state.
    pub fn new(provider: Arc<dyn CredentialsProvider>, directory: Arc<dyn UserDirectory>) -> Self {
        Self {
            provider,
            directory,
        }
    }
}
