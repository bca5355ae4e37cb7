use super::account::{Account, AccountId};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Read capability the endpoint depends on instead of a concrete database.
///
/// Implementations must report a missing row as `AccountError::NotFound` and
/// every other fault as `AccountError::BackendFailure`.
#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn get_account(&self, id: AccountId) -> Result<Account>;
}

pub type AccountStoreRef = Arc<dyn AccountStore>;
