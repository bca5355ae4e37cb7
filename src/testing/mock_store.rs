use crate::domain::account::{Account, AccountId};
use crate::domain::ports::AccountStore;
use crate::error::{AccountError, Result};
use async_trait::async_trait;
use std::sync::Mutex;

/// Which ids an expectation accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdMatcher {
    Any,
    Eq(i64),
}

impl IdMatcher {
    fn matches(&self, id: AccountId) -> bool {
        match self {
            IdMatcher::Any => true,
            IdMatcher::Eq(expected) => *expected == id.value(),
        }
    }
}

/// Programmed outcome of a matched call.
#[derive(Debug, Clone)]
pub enum Stub {
    Found(Account),
    NotFound,
    /// Any non-not-found fault, such as a dropped connection.
    Failure(String),
}

#[derive(Debug)]
struct Slot {
    matcher: IdMatcher,
    times: usize,
    calls: usize,
    stub: Stub,
}

#[derive(Debug, Default)]
struct State {
    slots: Vec<Slot>,
    unexpected: Vec<i64>,
}

/// A substitute [`AccountStore`] with exact call-count expectations.
///
/// Program it with [`MockAccountStore::expect_get_account`], run the
/// scenario, then call [`MockAccountStore::verify`]. Dropping the store
/// runs the same check.
#[derive(Debug, Default)]
pub struct MockAccountStore {
    state: Mutex<State>,
}

/// Builder returned by [`MockAccountStore::expect_get_account`].
///
/// Defaults to any id, exactly one call, and a not-found outcome. The
/// expectation is live as soon as it is created; each method edits it in place.
pub struct Expectation<'a> {
    store: &'a MockAccountStore,
    index: usize,
}

impl Expectation<'_> {
    pub fn with(self, matcher: IdMatcher) -> Self {
        self.store.lock().slots[self.index].matcher = matcher;
        self
    }

    pub fn times(self, times: usize) -> Self {
        self.store.lock().slots[self.index].times = times;
        self
    }

    pub fn returning(self, stub: Stub) -> Self {
        self.store.lock().slots[self.index].stub = stub;
        self
    }
}

impl MockAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expect_get_account(&self) -> Expectation<'_> {
        let mut state = self.lock();
        state.slots.push(Slot {
            matcher: IdMatcher::Any,
            times: 1,
            calls: 0,
            stub: Stub::NotFound,
        });
        let index = state.slots.len() - 1;
        Expectation { store: self, index }
    }

    /// Total number of calls received, matched or not.
    pub fn calls(&self) -> usize {
        let state = self.lock();
        state.slots.iter().map(|s| s.calls).sum::<usize>() + state.unexpected.len()
    }

    /// Panics unless every expectation was met exactly and no call went unmatched.
    pub fn verify(&self) {
        if let Some(report) = self.violations() {
            panic!("{report}");
        }
    }

    fn violations(&self) -> Option<String> {
        let state = self.lock();
        let mut problems: Vec<String> = state
            .slots
            .iter()
            .filter(|s| s.calls != s.times)
            .map(|s| {
                format!(
                    "get_account({:?}) expected {} call(s), got {}",
                    s.matcher, s.times, s.calls
                )
            })
            .collect();
        problems.extend(
            state
                .unexpected
                .iter()
                .map(|id| format!("unexpected get_account({id})")),
        );

        if problems.is_empty() {
            None
        } else {
            Some(format!("MockAccountStore: {}", problems.join("; ")))
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        // A panicking test may poison the lock; the data is still readable.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Drop for MockAccountStore {
    fn drop(&mut self) {
        if std::thread::panicking() {
            return;
        }
        if let Some(report) = self.violations() {
            panic!("{report}");
        }
    }
}

#[async_trait]
impl AccountStore for MockAccountStore {
    async fn get_account(&self, id: AccountId) -> Result<Account> {
        let mut state = self.lock();
        let slot = state
            .slots
            .iter_mut()
            .find(|s| s.matcher.matches(id) && s.calls < s.times);

        let Some(slot) = slot else {
            state.unexpected.push(id.value());
            return Err(AccountError::backend(format!(
                "no expectation for get_account({id})"
            )));
        };

        slot.calls += 1;
        match &slot.stub {
            Stub::Found(account) => Ok(account.clone()),
            Stub::NotFound => Err(AccountError::NotFound(id.value())),
            Stub::Failure(msg) => Err(AccountError::backend(msg.clone())),
        }
    }
}
