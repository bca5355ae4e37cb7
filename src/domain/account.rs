use crate::error::{AccountError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A validated account identifier.
///
/// The only way to obtain one from untrusted input is [`AccountId::parse`],
/// so holding an `AccountId` means the value is at least [`AccountId::MIN`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountId(i64);

impl AccountId {
    pub const MIN: i64 = 1;

    /// Parses a raw path segment. No trimming is done.
    pub fn parse(raw: &str) -> Result<Self> {
        let value = i64::from_str(raw).map_err(|e| {
            AccountError::InvalidRequest(format!("account id {raw:?} is not an integer: {e}"))
        })?;
        Self::try_from(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for AccountId {
    type Error = AccountError;

    fn try_from(value: i64) -> Result<Self> {
        if value >= Self::MIN {
            Ok(Self(value))
        } else {
            Err(AccountError::InvalidRequest(format!(
                "account id must be at least {}, got {value}",
                Self::MIN
            )))
        }
    }
}

impl From<AccountId> for i64 {
    fn from(id: AccountId) -> Self {
        id.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A signed monetary value.
///
/// Serialized as a JSON number carrying the exact decimal digits, never as
/// a float approximation or a string.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Balance(#[serde(with = "rust_decimal::serde::arbitrary_precision")] pub Decimal);

impl Balance {
    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

/// The state of a single account as seen by the lookup endpoint.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Account {
    /// The unique identifier, always positive for persisted accounts.
    pub id: i64,
    /// Name of the account holder.
    pub owner: String,
    pub balance: Balance,
    /// Short currency code such as `USD`.
    pub currency: String,
}

impl Account {
    pub fn new(
        id: AccountId,
        owner: impl Into<String>,
        balance: Balance,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            id: id.value(),
            owner: owner.into(),
            balance,
            currency: currency.into(),
        }
    }
}
