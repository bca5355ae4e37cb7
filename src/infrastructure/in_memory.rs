use crate::domain::account::{Account, AccountId};
use crate::domain::ports::AccountStore;
use crate::error::{AccountError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory account backend.
///
/// Clones share the same map, so a seeded store can be handed to the router
/// while the caller keeps a handle to it.
#[derive(Default, Clone)]
pub struct InMemoryAccountStore {
    accounts: Arc<RwLock<HashMap<i64, Account>>>,
}

impl InMemoryAccountStore {
    /// Creates a new, empty in-memory account store.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_accounts(accounts: impl IntoIterator<Item = Account>) -> Self {
        let map = accounts.into_iter().map(|a| (a.id, a)).collect();
        Self {
            accounts: Arc::new(RwLock::new(map)),
        }
    }

    /// Inserts or replaces the account keyed by its id.
    pub async fn insert(&self, account: Account) {
        let mut accounts = self.accounts.write().await;
        accounts.insert(account.id, account);
    }

    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn get_account(&self, id: AccountId) -> Result<Account> {
        let accounts = self.accounts.read().await;
        accounts
            .get(&id.value())
            .cloned()
            .ok_or(AccountError::NotFound(id.value()))
    }
}
