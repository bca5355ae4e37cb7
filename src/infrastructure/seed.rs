use crate::domain::account::{Account, AccountId};
use crate::error::SeedError;
use std::io::Read;

/// Reads a JSON array of accounts, rejecting any with an id below
/// [`AccountId::MIN`].
pub fn read_accounts<R: Read>(source: R) -> Result<Vec<Account>, SeedError> {
    let accounts: Vec<Account> = serde_json::from_reader(source)?;
    if let Some(bad) = accounts.iter().find(|a| a.id < AccountId::MIN) {
        return Err(SeedError::InvalidId(bad.id));
    }
    Ok(accounts)
}
