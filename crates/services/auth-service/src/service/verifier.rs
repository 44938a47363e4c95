//! Credential verifier - decides whether a login attempt matches an account.
//!
//! Every credential problem (bad shape, unknown email, wrong password)
//! collapses into [`Verification::Rejected`]. Only a failing directory
//! lookup is returned as an error.

use std::sync::Arc;

use once_cell::sync::Lazy;
use serde_json::Value;
use tracing::{debug, error, info};

use crate::repository::UserDirectory;
use common::{AppError, AppResult};
use domain::{AccountResponse, Credentials, Password, DUMMY_PASSWORD, INVALID_CREDENTIALS_MESSAGE};

/// Argon2 hash checked when the email is unknown, so that a missing account
/// costs the same hash work as a wrong password.
static DUMMY_HASH: Lazy<Option<Password>> = Lazy::new(|| Password::new(DUMMY_PASSWORD).ok());

/// Outcome of a verification attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verification {
    /// Credentials matched; carries the account without its hash
    Authenticated(AccountResponse),
    /// Credentials did not match. Deliberately carries no reason.
    Rejected,
}

impl Verification {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Verification::Authenticated(_))
    }

    /// The authenticated account, if any
    pub fn into_account(self) -> Option<AccountResponse> {
        match self {
            Verification::Authenticated(account) => Some(account),
            Verification::Rejected => None,
        }
    }
}

/// Verifies email/password credentials against a [`UserDirectory`].
///
/// Stateless across calls; share it behind an `Arc`.
pub struct CredentialVerifier {
    directory: Arc<dyn UserDirectory>,
}

impl CredentialVerifier {
    pub fn new(directory: Arc<dyn UserDirectory>) -> Self {
        Self { directory }
    }

    /// Verify an untyped credentials payload.
    ///
    /// # Errors
    /// Returns [`AppError::DirectoryUnavailable`] when the account lookup
    /// fails. The failure is logged here, once.
    pub async fn verify(&self, raw: &Value) -> AppResult<Verification> {
        let credentials = match Credentials::parse(raw) {
            Ok(credentials) => credentials,
            Err(e) => {
                debug!(reason = %e, "Credentials failed validation");
                return Ok(Self::reject());
            }
        };
        let (email, password) = credentials.into_parts();

        let account = match self.directory.find_by_email(&email).await {
            Ok(account) => account,
            Err(e) => {
                error!(error = %e, "Failed to fetch user");
                return Err(AppError::directory_unavailable(e.to_string()));
            }
        };

        let stored = account.as_ref().map(|a| a.password());
        let passwords_match = check_password(password, stored).await?;

        match account {
            Some(account) if passwords_match => {
                debug!(account_id = %account.id, "Credentials verified");
                Ok(Verification::Authenticated(AccountResponse::from(account)))
            }
            _ => Ok(Self::reject()),
        }
    }

    fn reject() -> Verification {
        info!("{}", INVALID_CREDENTIALS_MESSAGE);
        Verification::Rejected
    }
}

/// Compare on the blocking pool; hashing is deliberately slow.
async fn check_password(password: String, stored: Option<Password>) -> AppResult<bool> {
    tokio::task::spawn_blocking(move || match stored {
        Some(stored) => stored.verify(&password),
        None => {
            if let Some(dummy) = DUMMY_HASH.as_ref() {
                dummy.verify(&password);
            }
            false
        }
    })
    .await
    .map_err(|e| AppError::internal(format!("Password verification task failed: {}", e)))
}
