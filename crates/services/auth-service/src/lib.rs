//! Auth Service Library
//!
//! Credential verification for email/password logins. The verifier reads
//! account records from a SeaORM-backed user directory and is exposed both
//! as a [`service::CredentialsProvider`] and over a small HTTP adapter.

pub mod api;
pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::net::SocketAddr;
use std::sync::Arc;

use serde_json::json;
use tower_http::trace::{DefaultOnFailure, TraceLayer};
use tracing::{info, Level};

use crate::api::{create_router, AppState};
use crate::config::AuthServiceConfig;
use crate::infra::Database;
use crate::repository::UserStore;
use crate::service::{CredentialVerifier, Verification};
use common::AppResult;

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

/// Run the HTTP adapter until the listener fails.
pub async fn run_server(config: AuthServiceConfig) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect(&config.database).await?;
    let directory = Arc::new(UserStore::new(db.get_connection()));
    let verifier = Arc::new(CredentialVerifier::new(directory.clone()));

    let state = AppState::new(verifier, directory);

    // Directory faults are already logged at error level by the verifier
    let app = create_router(state).layer(
        TraceLayer::new_for_http().on_failure(DefaultOnFailure::new().level(Level::WARN)),
    );

    let addr: SocketAddr = config.server.addr().parse()?;
    info!("Auth service listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let served = axum::serve(listener, app).await;

    db.close().await?;
    served?;

    Ok(())
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(
    config: AuthServiceConfig,
    action: MigrateAction,
) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    db.close().await?;
    Ok(())
}

/// Verify a single email/password pair against the configured directory.
pub async fn verify_once(
    config: AuthServiceConfig,
    email: &str,
    password: &str,
) -> Result<AppResult<Verification>, Box<dyn std::error::Error>> {
    let db = Database::connect(&config.database).await?;
    let verifier = CredentialVerifier::new(Arc::new(UserStore::new(db.get_connection())));

    let result = verifier
        .verify(&json!({ "email": email, "password": password }))
        .await;

    drop(verifier);
    db.close().await?;
    Ok(result)
}
