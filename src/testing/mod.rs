//! Test-only helpers: a programmable account store and random fixtures.

pub mod fixtures;
mod mock_store;

pub use mock_store::{Expectation, IdMatcher, MockAccountStore, Stub};
