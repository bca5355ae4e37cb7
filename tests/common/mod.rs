#![allow(dead_code)]

use account_lookup::domain::ports::AccountStoreRef;
use account_lookup::interfaces::http::{AppState, router};
use axum::body::{Body, Bytes};
use axum::http::{Method, Request, StatusCode};
use std::time::Duration;
use tower::ServiceExt;

pub const LOOKUP_TIMEOUT: Duration = Duration::from_secs(2);

/// Sends `GET /accounts/{raw_id}` through a fresh router and returns the
/// status with the collected body.
pub async fn get_account(store: AccountStoreRef, raw_id: &str) -> (StatusCode, Bytes) {
    get_account_with_timeout(store, raw_id, LOOKUP_TIMEOUT).await
}

pub async fn get_account_with_timeout(
    store: AccountStoreRef,
    raw_id: &str,
    timeout: Duration,
) -> (StatusCode, Bytes) {
    let app = router(AppState::new(store, timeout));
    let request = Request::builder()
        .method(Method::GET)
        .uri(format!("/accounts/{raw_id}"))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body)
}
