use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failure classes surfaced by the account endpoint.
///
/// The three variants map one-to-one onto the response status codes, so a
/// lower layer must pick the right one rather than leaving it to the handler.
#[derive(Error, Debug)]
pub enum AccountError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("account {0} not found")]
    NotFound(i64),
    #[error("backend failure: {0}")]
    BackendFailure(#[source] BoxError),
}

impl AccountError {
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::BackendFailure(Box::new(std::io::Error::other(msg.into())))
    }
}

impl From<serde_json::Error> for AccountError {
    fn from(e: serde_json::Error) -> Self {
        Self::BackendFailure(Box::new(e))
    }
}

#[cfg(feature = "storage-rocksdb")]
impl From<rocksdb::Error> for AccountError {
    fn from(e: rocksdb::Error) -> Self {
        Self::BackendFailure(Box::new(e))
    }
}

pub type Result<T> = std::result::Result<T, AccountError>;

/// Failures while loading a seed file at startup.
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid seed document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("seed account has non-positive id {0}")]
    InvalidId(i64),
}
