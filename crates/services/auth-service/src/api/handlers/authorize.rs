//! Credentials authorization handler.

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
    routing::post,
    Router,
};
use serde_json::Value;

use crate::api::state::AppState;
use common::{AppError, AppResult};
use domain::AccountResponse;

/// Create authorization routes
pub fn authorize_routes() -> Router<AppState> {
    Router::new().route("/authorize", post(authorize))
}

/// Authorize a credentials payload.
///
/// Any body that is not a JSON document is answered exactly like wrong
/// credentials.
pub async fn authorize(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<AccountResponse>> {
    let Ok(Json(credentials)) = payload else {
        tracing::info!("Invalid credentials");
        return Err(AppError::InvalidCredentials);
    };

    state
        .provider
        .authorize(&credentials)
        .await?
        .map(Json)
        .ok_or(AppError::InvalidCredentials)
}
