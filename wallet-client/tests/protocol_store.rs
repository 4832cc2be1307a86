//! Protocol container behavior: the aggregate fetch policy (profile-absence
//! tolerance, keep-stale-on-failure, superseded-fetch discard), the mining
//! session round-trip, and the unauthorized path through the session guard.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use shared::{DeviceType, LoginCredentials, MiningMode};
use wallet_client::core::session::SessionGuard;
use wallet_client::core::{ApiError, ProtocolApi};
use wallet_client::i18n::Language;
use wallet_client::services::FixtureApi;
use wallet_client::state::{AuthStore, ProtocolStore};
use wallet_client::storage::{KeyValueStore, MemoryStore, TOKEN_KEY, USER_KEY};

struct Harness {
    api: Arc<FixtureApi>,
    guard: Arc<SessionGuard>,
    auth: Arc<AuthStore>,
    protocol: Arc<ProtocolStore>,
}

fn build(store: Arc<dyn KeyValueStore>) -> Harness {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    let api = Arc::new(FixtureApi::new());
    let guard = Arc::new(SessionGuard::new(store.clone()));
    let auth = Arc::new(AuthStore::new(
        api.clone(),
        store.clone(),
        guard.clone(),
        Language::Ar,
    ));
    let protocol = Arc::new(ProtocolStore::new(
        api.clone(),
        auth.clone(),
        guard.clone(),
        Language::Ar,
    ));
    Harness {
        api,
        guard,
        auth,
        protocol,
    }
}

async fn logged_in() -> Harness {
    logged_in_with(Arc::new(MemoryStore::new())).await
}

async fn logged_in_with(store: Arc<dyn KeyValueStore>) -> Harness {
    let harness = build(store);
    harness
        .auth
        .login(LoginCredentials {
            email: "demo@orecoin.io".to_string(),
            password: "secret1".to_string(),
        })
        .await
        .expect("fixture login resolves");
    harness
}

#[tokio::test]
async fn refresh_populates_the_full_snapshot() {
    let h = logged_in().await;
    h.protocol.refresh().await;

    let snapshot = h.protocol.snapshot();
    assert!(!snapshot.is_loading);
    assert!(snapshot.error.is_none());
    assert_eq!(snapshot.mining_pools.len(), 2);
    assert_eq!(
        snapshot.active_session.as_ref().map(|s| s.id.as_str()),
        Some("mining-1")
    );
    assert!(snapshot.dna_profile.is_some());
    assert!(snapshot.protocol_state.is_some());
    assert_eq!(snapshot.security_alerts.len(), 1);
}

#[tokio::test]
async fn refresh_without_a_user_issues_no_requests() {
    let h = build(Arc::new(MemoryStore::new()));
    h.auth.rehydrate();

    h.protocol.refresh().await;

    assert!(h.api.calls().is_empty());
    let snapshot = h.protocol.snapshot();
    assert!(!snapshot.is_loading);
    assert!(snapshot.error.is_none());
}

#[tokio::test]
async fn refresh_after_logout_keeps_the_last_snapshot() {
    let h = logged_in().await;
    h.protocol.refresh().await;
    let calls_before = h.api.calls().len();

    h.auth.logout();
    h.protocol.refresh().await;

    // Loaded fields stay in place until the next authenticated refresh; the
    // login screen covers the dashboard in the meantime.
    let snapshot = h.protocol.snapshot();
    assert!(!snapshot.is_loading);
    assert_eq!(snapshot.mining_pools.len(), 2);
    assert!(snapshot.active_session.is_some());
    assert_eq!(h.api.calls().len(), calls_before);
}

#[tokio::test]
async fn missing_dna_profile_is_not_an_error() {
    let h = logged_in().await;
    h.api.mutate(|data| data.dna = None);

    h.protocol.refresh().await;

    let snapshot = h.protocol.snapshot();
    assert!(snapshot.dna_profile.is_none());
    assert!(snapshot.error.is_none());
    // The rest of the dashboard loads normally.
    assert_eq!(snapshot.mining_pools.len(), 2);
}

#[tokio::test]
async fn failed_refresh_keeps_stale_data_and_surfaces_one_error() {
    let h = logged_in().await;
    h.protocol.refresh().await;
    assert_eq!(h.protocol.snapshot().mining_pools.len(), 2);

    h.api
        .fail_with("mining_pools", ApiError::Network("refused".to_string()));
    h.protocol.refresh().await;

    let snapshot = h.protocol.snapshot();
    assert!(!snapshot.is_loading);
    // Previously-loaded data stays in place, localized message set.
    assert_eq!(snapshot.mining_pools.len(), 2);
    assert!(snapshot.active_session.is_some());
    assert!(snapshot.error.unwrap().contains("خطأ في الاتصال"));
}

#[tokio::test(start_paused = true)]
async fn superseded_fetch_results_are_discarded() {
    let h = logged_in().await;
    h.api.delay("mining_pools", Duration::from_millis(50));

    let slow = tokio::spawn({
        let protocol = h.protocol.clone();
        async move { protocol.refresh().await }
    });
    // Let the slow refresh issue its reads and park in the delayed one.
    tokio::task::yield_now().await;
    assert_eq!(h.api.call_count("mining_pools"), 1);

    // A newer refresh completes immediately with the current pool data.
    h.api.delay("mining_pools", Duration::ZERO);
    h.protocol.refresh().await;
    assert_eq!(h.protocol.snapshot().mining_pools.len(), 2);

    // The slow fetch will observe this mutation, but its write must be
    // discarded because it was superseded.
    h.api.mutate(|data| data.pools.truncate(1));
    slow.await.expect("slow refresh completes");

    assert_eq!(h.protocol.snapshot().mining_pools.len(), 2);
    assert!(h.protocol.snapshot().error.is_none());
}

#[tokio::test]
async fn start_mining_round_trip() {
    let h = logged_in().await;
    h.api.mutate(|data| data.sessions.clear());
    h.protocol.refresh().await;
    assert!(h.protocol.snapshot().active_session.is_none());
    let pool_fetches = h.api.call_count("mining_pools");

    let session = h
        .protocol
        .start_mining("pool-1", MiningMode::Pool, DeviceType::Desktop)
        .await
        .expect("start resolves");

    assert_eq!(session.pool_id, "pool-1");
    assert_eq!(
        h.protocol.snapshot().active_session.map(|s| s.id),
        Some(session.id)
    );
    // The pool list is re-fetched to pick up updated miner counts.
    assert_eq!(h.api.call_count("mining_pools"), pool_fetches + 1);
}

#[tokio::test]
async fn pool_mode_requires_a_pool_before_any_request() {
    let h = logged_in().await;

    let err = h
        .protocol
        .start_mining("", MiningMode::Pool, DeviceType::Mobile)
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Validation(_)));
    assert_eq!(h.api.call_count("start_mining"), 0);
}

#[tokio::test]
async fn solo_mode_needs_no_pool() {
    let h = logged_in().await;

    let session = h
        .protocol
        .start_mining("", MiningMode::Solo, DeviceType::Rig)
        .await
        .expect("solo start resolves");

    assert_eq!(session.pool_id, "");
    assert!(h.protocol.snapshot().active_session.is_some());
}

#[tokio::test]
async fn stop_mining_without_a_session_is_a_noop() {
    let h = logged_in().await;
    h.api.mutate(|data| data.sessions.clear());
    h.protocol.refresh().await;

    h.protocol.stop_mining().await.expect("noop stop resolves");

    assert_eq!(h.api.call_count("stop_mining"), 0);
}

#[tokio::test]
async fn stop_mining_closes_the_active_session() {
    let h = logged_in().await;
    h.protocol.refresh().await;
    assert!(h.protocol.snapshot().active_session.is_some());

    h.protocol.stop_mining().await.expect("stop resolves");

    assert!(h.protocol.snapshot().active_session.is_none());
    assert_eq!(h.api.call_count("stop_mining"), 1);
    // The data source saw the session close too.
    assert!(h.api.active_session().await.unwrap().is_none());
}

#[tokio::test]
async fn stop_mining_failure_keeps_the_session() {
    let h = logged_in().await;
    h.protocol.refresh().await;
    h.api
        .fail_with("stop_mining", ApiError::Server("try later".to_string()));

    let err = h.protocol.stop_mining().await.unwrap_err();

    assert!(matches!(err, ApiError::Server(_)));
    assert!(h.protocol.snapshot().active_session.is_some());
}

/// Storage wrapper counting removals, for asserting the single-clear latch.
struct RecordingStore {
    inner: MemoryStore,
    removes: Mutex<Vec<String>>,
}

impl RecordingStore {
    fn new() -> Self {
        Self {
            inner: MemoryStore::new(),
            removes: Mutex::new(Vec::new()),
        }
    }

    fn removals_of(&self, key: &str) -> usize {
        self.removes.lock().iter().filter(|k| *k == key).count()
    }
}

impl KeyValueStore for RecordingStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) {
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) {
        self.removes.lock().push(key.to_string());
        self.inner.remove(key)
    }
}

#[tokio::test]
async fn unauthorized_clears_credentials_exactly_once() {
    let store = Arc::new(RecordingStore::new());
    let h = logged_in_with(store.clone()).await;
    assert!(store.get(TOKEN_KEY).is_some());

    h.api.fail_with("mining_pools", ApiError::Unauthorized);
    h.api.fail_with("protocol_state", ApiError::Unauthorized);

    // Two refreshes, both observing rejected sessions.
    h.protocol.refresh().await;
    h.protocol.refresh().await;

    assert!(h.guard.login_required());
    assert!(store.get(TOKEN_KEY).is_none());
    assert!(store.get(USER_KEY).is_none());
    assert_eq!(store.removals_of(TOKEN_KEY), 1);
    assert_eq!(store.removals_of(USER_KEY), 1);

    // A fresh login re-arms the guard for the next rejection.
    h.auth
        .login(LoginCredentials {
            email: "demo@orecoin.io".to_string(),
            password: "secret1".to_string(),
        })
        .await
        .expect("login resolves");
    assert!(!h.guard.login_required());

    h.protocol.refresh().await;
    assert_eq!(store.removals_of(TOKEN_KEY), 2);
}
