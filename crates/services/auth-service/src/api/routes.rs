//! Route configuration.

use axum::Router;

use crate::api::handlers::{authorize_routes, health_routes};
use crate::api::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .merge(authorize_routes())
        .with_state(state)
}
