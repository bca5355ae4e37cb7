use crate::domain::account::{Account, AccountId};
use crate::domain::ports::AccountStore;
use crate::error::{AccountError, Result};
use async_trait::async_trait;
use rocksdb::{ColumnFamily, ColumnFamilyDescriptor, DB, Options};
use std::path::Path;
use std::sync::Arc;

/// Column Family for storing account states.
pub const CF_ACCOUNTS: &str = "accounts";

/// A persistent account backend using RocksDB.
///
/// Accounts are stored as JSON documents keyed by the big-endian bytes of
/// their id. `Clone` shares the underlying `Arc<DB>`.
#[derive(Clone)]
pub struct RocksDbAccountStore {
    db: Arc<DB>,
}

impl RocksDbAccountStore {
    /// Opens or creates a RocksDB instance at the specified path.
    ///
    /// Ensures that the "accounts" column family exists.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_accounts = ColumnFamilyDescriptor::new(CF_ACCOUNTS, Options::default());
        let db = DB::open_cf_descriptors(&opts, path, vec![cf_accounts])?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Writes an account, replacing any previous value under the same id.
    pub fn put(&self, account: &Account) -> Result<()> {
        let cf = self.accounts_cf()?;
        let value = serde_json::to_vec(account)?;
        self.db.put_cf(cf, account.id.to_be_bytes(), value)?;
        Ok(())
    }

    fn accounts_cf(&self) -> Result<&ColumnFamily> {
        self.db
            .cf_handle(CF_ACCOUNTS)
            .ok_or_else(|| AccountError::backend("Accounts column family not found"))
    }
}

#[async_trait]
impl AccountStore for RocksDbAccountStore {
    async fn get_account(&self, id: AccountId) -> Result<Account> {
        let cf = self.accounts_cf()?;
        match self.db.get_pinned_cf(cf, id.value().to_be_bytes())? {
            Some(bytes) => Ok(serde_json::from_slice(&bytes)?),
            None => Err(AccountError::NotFound(id.value())),
        }
    }
}
