//! Single-account retrieval endpoint.
//!
//! - **[`domain`]**: the `Account` entity, the validated `AccountId` and the
//!   `AccountStore` port the handler depends on.
//! - **[`infrastructure`]**: concrete backends for the port.
//! - **[`interfaces`]**: the HTTP surface that validates, looks up and
//!   classifies each request.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod testing;
