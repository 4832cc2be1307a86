//! # Session Coordinator
//!
//! A single object that reacts to rejected sessions. The HTTP wrapper only
//! *returns* [`ApiError::Unauthorized`]; it never touches storage or
//! navigation itself. Both state containers route errors through
//! [`SessionGuard::observe`], which clears the persisted credentials exactly
//! once and raises a flag the presentation layer polls to redirect to the
//! login entry point.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::core::error::ApiError;
use crate::storage::{KeyValueStore, TOKEN_KEY, USER_KEY};

/// Observes unauthorized responses and invalidates the persisted session.
///
/// Constructed once at application start and injected into every state
/// container; there is no ambient global registry.
pub struct SessionGuard {
    store: Arc<dyn KeyValueStore>,
    invalidated: AtomicBool,
}

impl SessionGuard {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            invalidated: AtomicBool::new(false),
        }
    }

    /// Route an error through the guard. Only [`ApiError::Unauthorized`] has
    /// an effect; everything else passes through untouched.
    pub fn observe(&self, error: &ApiError) {
        if matches!(error, ApiError::Unauthorized) {
            self.invalidate();
        }
    }

    /// Clear the persisted token and user snapshot. Latched: concurrent or
    /// repeated unauthorized responses clear storage exactly once.
    pub fn invalidate(&self) {
        if self.invalidated.swap(true, Ordering::SeqCst) {
            return;
        }
        tracing::warn!("session rejected by server, clearing stored credentials");
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_KEY);
    }

    /// True once an unauthorized response has been observed and not yet
    /// acknowledged by a new login.
    pub fn login_required(&self) -> bool {
        self.invalidated.load(Ordering::SeqCst)
    }

    /// Re-arm the guard after a successful login or registration.
    pub fn reset(&self) {
        self.invalidated.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn unauthorized_clears_credentials_once() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        store.set(TOKEN_KEY, "tok");
        store.set(USER_KEY, "{}");

        let guard = SessionGuard::new(store.clone());
        guard.observe(&ApiError::Unauthorized);
        assert!(guard.login_required());
        assert!(store.get(TOKEN_KEY).is_none());
        assert!(store.get(USER_KEY).is_none());

        // A later login writes fresh credentials; a second stale 401 while
        // latched must not wipe them.
        store.set(TOKEN_KEY, "tok2");
        guard.observe(&ApiError::Unauthorized);
        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("tok2"));
    }

    #[test]
    fn other_errors_pass_through() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        store.set(TOKEN_KEY, "tok");

        let guard = SessionGuard::new(store.clone());
        guard.observe(&ApiError::Network("timeout".to_string()));
        assert!(!guard.login_required());
        assert!(store.get(TOKEN_KEY).is_some());
    }

    #[test]
    fn reset_rearms_the_latch() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let guard = SessionGuard::new(store.clone());

        guard.invalidate();
        guard.reset();
        assert!(!guard.login_required());

        store.set(TOKEN_KEY, "tok");
        guard.observe(&ApiError::Unauthorized);
        assert!(store.get(TOKEN_KEY).is_none());
    }
}
