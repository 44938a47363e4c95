//! Credentials provider capability.
//!
//! The plug-in point for host authentication frameworks: anything that can
//! turn a credentials payload into an account (or nothing) without exposing
//! why it said no.

use async_trait::async_trait;
use serde_json::Value;

use super::verifier::CredentialVerifier;
use common::AppResult;
use domain::AccountResponse;

/// A component that authorizes untyped credential payloads.
#[async_trait]
pub trait CredentialsProvider: Send + Sync {
    /// `Ok(Some(account))` on success, `Ok(None)` on any credential
    /// rejection, `Err` only for operational failures.
    async fn authorize(&self, credentials: &Value) -> AppResult<Option<AccountResponse>>;
}

#[async_trait]
impl CredentialsProvider for CredentialVerifier {
    async fn authorize(&self, credentials: &Value) -> AppResult<Option<AccountResponse>> {
        Ok(self.verify(credentials).await?.into_account())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::repository::MockUserDirectory;
    use common::AppError;

    #[test]
    fn test_authorize_returns_none_for_unknown_account() {
        let mut directory = MockUserDirectory::new();
        directory.expect_find_by_email().returning(|_| Ok(None));
        let provider: Arc<dyn CredentialsProvider> =
            Arc::new(CredentialVerifier::new(Arc::new(directory)));

        let result = tokio_test::block_on(
            provider.authorize(&json!({ "email": "nobody@x.com", "password": "correctpw" })),
        );

        assert_eq!(result.unwrap(), None);
    }

    #[test]
    fn test_authorize_propagates_directory_fault() {
        let mut directory = MockUserDirectory::new();
        directory
            .expect_find_by_email()
            .returning(|_| Err(AppError::internal("timeout")));
        let provider = CredentialVerifier::new(Arc::new(directory));

        let result = tokio_test::block_on(
            provider.authorize(&json!({ "email": "u@x.com", "password": "correctpw" })),
        );

        assert!(matches!(result, Err(AppError::DirectoryUnavailable(_))));
    }
}
