//! Shared test fixtures.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use auth_service_lib::repository::UserDirectory;
use common::{AppError, AppResult};
use domain::{Account, Password};

/// In-memory directory keyed by exact email.
#[derive(Default)]
pub struct InMemoryDirectory {
    accounts: HashMap<String, Account>,
    lookups: AtomicUsize,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_account(mut self, account: Account) -> Self {
        self.accounts.insert(account.email.clone(), account);
        self
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserDirectory for InMemoryDirectory {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.accounts.get(email).cloned())
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}

/// Directory whose store is unreachable.
pub struct UnreachableDirectory;

#[async_trait]
impl UserDirectory for UnreachableDirectory {
    async fn find_by_email(&self, _email: &str) -> AppResult<Option<Account>> {
        Err(AppError::internal("connection refused"))
    }

    async fn ping(&self) -> AppResult<()> {
        Err(AppError::internal("connection refused"))
    }
}

/// Account whose stored hash is Argon2(`plain`).
pub fn argon2_account(email: &str, plain: &str) -> Account {
    let hash = Password::new(plain).unwrap().into_string();
    Account::new(Uuid::new_v4(), "Test User".to_string(), email.to_string(), hash)
}

/// Account whose stored hash is bcrypt(`plain`) at the minimum cost.
pub fn bcrypt_account(email: &str, plain: &str) -> Account {
    let hash = bcrypt::hash(plain, 4).unwrap();
    Account::new(Uuid::new_v4(), "Seeded User".to_string(), email.to_string(), hash)
}

pub fn shared<T>(value: T) -> Arc<T> {
    Arc::new(value)
}
