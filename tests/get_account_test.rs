mod common;

use account_lookup::domain::account::Account;
use account_lookup::testing::fixtures::random_account;
use account_lookup::testing::{IdMatcher, MockAccountStore, Stub};
use axum::body::Bytes;
use axum::http::StatusCode;
use std::sync::Arc;

struct TestCase {
    name: &'static str,
    account_id: i64,
    expected_calls: usize,
    build_stubs: fn(&MockAccountStore, &Account),
    check_response: fn(&str, StatusCode, &Bytes, &Account),
}

fn require_body_match_account(name: &str, body: &Bytes, account: &Account) {
    let got: Account = serde_json::from_slice(body)
        .unwrap_or_else(|e| panic!("{name}: body is not an account: {e}"));
    assert_eq!(&got, account, "{name}");
}

#[tokio::test]
async fn test_get_account_scenarios() {
    let account = random_account();

    let cases = [
        TestCase {
            name: "OK",
            account_id: account.id,
            expected_calls: 1,
            build_stubs: |store, account| {
                store
                    .expect_get_account()
                    .with(IdMatcher::Eq(account.id))
                    .times(1)
                    .returning(Stub::Found(account.clone()));
            },
            check_response: |name, status, body, account| {
                assert_eq!(status, StatusCode::OK, "{name}");
                require_body_match_account(name, body, account);
            },
        },
        TestCase {
            name: "NotFound",
            account_id: account.id,
            expected_calls: 1,
            build_stubs: |store, account| {
                store
                    .expect_get_account()
                    .with(IdMatcher::Eq(account.id))
                    .times(1)
                    .returning(Stub::NotFound);
            },
            check_response: |name, status, _, _| {
                assert_eq!(status, StatusCode::NOT_FOUND, "{name}");
            },
        },
        TestCase {
            name: "InternalError",
            account_id: account.id,
            expected_calls: 1,
            build_stubs: |store, account| {
                store
                    .expect_get_account()
                    .with(IdMatcher::Eq(account.id))
                    .times(1)
                    .returning(Stub::Failure("connection is already closed".into()));
            },
            check_response: |name, status, _, _| {
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{name}");
            },
        },
        TestCase {
            name: "InvalidID",
            account_id: 0,
            expected_calls: 0,
            build_stubs: |store, _| {
                store
                    .expect_get_account()
                    .with(IdMatcher::Any)
                    .times(0)
                    .returning(Stub::Failure("connection is already closed".into()));
            },
            check_response: |name, status, _, _| {
                assert_eq!(status, StatusCode::BAD_REQUEST, "{name}");
            },
        },
    ];

    for tc in cases {
        let store = Arc::new(MockAccountStore::new());
        (tc.build_stubs)(&store, &account);

        let (status, body) = common::get_account(store.clone(), &tc.account_id.to_string()).await;

        (tc.check_response)(tc.name, status, &body, &account);
        assert_eq!(store.calls(), tc.expected_calls, "{}", tc.name);
        store.verify();
    }
}

#[tokio::test]
async fn test_malformed_ids_never_reach_store() {
    for raw in ["-1", "-42", "abc", "1.5", "%201", "99999999999999999999"] {
        let store = Arc::new(MockAccountStore::new());
        store.expect_get_account().times(0);

        let (status, _) = common::get_account(store.clone(), raw).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "id {raw:?}");
        assert_eq!(store.calls(), 0, "id {raw:?}");
        store.verify();
    }
}

#[tokio::test]
async fn test_found_body_round_trips_for_random_accounts() {
    for _ in 0..25 {
        let account = random_account();
        let store = Arc::new(MockAccountStore::new());
        store
            .expect_get_account()
            .with(IdMatcher::Eq(account.id))
            .returning(Stub::Found(account.clone()));

        let (status, body) = common::get_account(store.clone(), &account.id.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        require_body_match_account("random", &body, &account);
        store.verify();
    }
}

#[tokio::test]
async fn test_error_body_is_json() {
    let store = Arc::new(MockAccountStore::new());
    store
        .expect_get_account()
        .with(IdMatcher::Eq(12))
        .returning(Stub::NotFound);

    let (status, body) = common::get_account(store.clone(), "12").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(value["error"].is_string());
    store.verify();
}

#[tokio::test]
async fn test_bound_expectation_applies_to_request() {
    let store = Arc::new(MockAccountStore::new());
    let expectation = store
        .expect_get_account()
        .with(IdMatcher::Eq(3))
        .returning(Stub::NotFound);

    let (status, _) = common::get_account(store.clone(), "3").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    drop(expectation);
    assert_eq!(store.calls(), 1);
    store.verify();
}
