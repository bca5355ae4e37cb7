//! HTTP surface: `GET /accounts/:id`.
//!
//! Every request runs Validate, then Lookup, then Classify, in that order.
//! A request that fails validation never reaches the store.

mod handler;
mod response;

pub use handler::get_account;

use crate::domain::ports::AccountStoreRef;
use axum::{Router, routing::get};
use std::time::Duration;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub store: AccountStoreRef,
    pub lookup_timeout: Duration,
}

impl AppState {
    pub fn new(store: AccountStoreRef, lookup_timeout: Duration) -> Self {
        Self {
            store,
            lookup_timeout,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/accounts/:id", get(get_account))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
