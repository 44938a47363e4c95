//! User directory - lookup of account records by email.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use super::entities::user::{self, Entity as UserEntity};
use common::{AppError, AppResult};
use domain::Account;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Read-only view of the account store.
///
/// `Ok(None)` means no such account; `Err` is reserved for the lookup
/// itself failing.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Find the account whose email matches exactly (case-sensitive)
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>>;

    /// Check that the backing store is reachable
    async fn ping(&self) -> AppResult<()>;
}

/// SeaORM-backed user directory
pub struct UserStore {
    db: Arc<DatabaseConnection>,
}

impl UserStore {
    /// Create new directory over a shared connection
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserDirectory for UserStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        tracing::debug!("Looking up account by email");

        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Account::from))
    }

    async fn ping(&self) -> AppResult<()> {
        self.db.ping().await.map_err(AppError::from)
    }
}
