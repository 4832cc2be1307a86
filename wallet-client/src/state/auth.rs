//! # Auth State Container
//!
//! Process-wide session state: current user, authenticated flag, loading
//! flag, and the last user-facing error. The container owns the persisted
//! token + user snapshot and is the only writer of those storage keys apart
//! from the session coordinator.
//!
//! Lifecycle: **Unknown** (initial, loading) → **Authenticated** or
//! **Anonymous**; logout re-enters Anonymous. Rehydration trusts the local
//! snapshot without a server round-trip.

use std::sync::Arc;

use parking_lot::RwLock;
use shared::{LoginCredentials, RegisterData, User, UserUpdate};

use crate::core::error::{ApiError, Result};
use crate::core::service::AuthApi;
use crate::core::session::SessionGuard;
use crate::i18n::{self, Language};
use crate::storage::{KeyValueStore, TOKEN_KEY, USER_KEY};
use crate::utils::validation;

/// Observable snapshot of the authentication state.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl Default for AuthState {
    /// The pre-rehydration Unknown state.
    fn default() -> Self {
        Self {
            user: None,
            is_authenticated: false,
            is_loading: true,
            error: None,
        }
    }
}

/// The auth container. Constructed once at application start with explicit
/// dependencies and shared via `Arc`.
pub struct AuthStore {
    api: Arc<dyn AuthApi>,
    store: Arc<dyn KeyValueStore>,
    guard: Arc<SessionGuard>,
    language: Language,
    state: RwLock<AuthState>,
}

impl AuthStore {
    pub fn new(
        api: Arc<dyn AuthApi>,
        store: Arc<dyn KeyValueStore>,
        guard: Arc<SessionGuard>,
        language: Language,
    ) -> Self {
        Self {
            api,
            store,
            guard,
            language,
            state: RwLock::new(AuthState::default()),
        }
    }

    pub fn snapshot(&self) -> AuthState {
        self.state.read().clone()
    }

    pub fn current_user(&self) -> Option<User> {
        self.state.read().user.clone()
    }

    /// Restore the session from durable storage. No network call: a stored
    /// token plus a parseable user snapshot is trusted as-is. Anything less
    /// clears storage and lands Anonymous.
    pub fn rehydrate(&self) {
        let token = self.store.get(TOKEN_KEY);
        let user_json = self.store.get(USER_KEY);

        let user = match (token, user_json) {
            (Some(_), Some(json)) => match serde_json::from_str::<User>(&json) {
                Ok(user) => Some(user),
                Err(err) => {
                    tracing::warn!(error = %err, "stored user snapshot is corrupt, clearing session");
                    None
                }
            },
            _ => None,
        };

        match user {
            Some(user) => {
                tracing::info!(user_id = %user.id, "session restored from storage");
                *self.state.write() = AuthState {
                    user: Some(user),
                    is_authenticated: true,
                    is_loading: false,
                    error: None,
                };
            }
            None => {
                self.store.remove(TOKEN_KEY);
                self.store.remove(USER_KEY);
                *self.state.write() = AuthState {
                    user: None,
                    is_authenticated: false,
                    is_loading: false,
                    error: None,
                };
            }
        }
    }

    /// Log in. On failure the localized message lands in `error` *and* the
    /// error is re-thrown so the form can react inline.
    pub async fn login(&self, credentials: LoginCredentials) -> Result<()> {
        self.begin_attempt();

        match self.api.login(&credentials).await {
            Ok(response) => {
                self.establish_session(response.user, &response.token);
                Ok(())
            }
            Err(err) => {
                self.record_failure(&err, i18n::login_failed(self.language));
                Err(err)
            }
        }
    }

    /// Register a new account; same shape as [`Self::login`], except the
    /// form fields are validated before any request is issued.
    pub async fn register(&self, data: RegisterData) -> Result<()> {
        let checks = [
            validation::validate_email(&data.email, self.language),
            validation::validate_password(&data.password, self.language),
            validation::validate_passwords_match(
                &data.password,
                &data.confirm_password,
                self.language,
            ),
        ];
        for check in checks {
            if let Some(message) = check.error {
                let err = ApiError::Validation(message);
                self.record_failure(&err, i18n::register_failed(self.language));
                return Err(err);
            }
        }

        self.begin_attempt();

        match self.api.register(&data).await {
            Ok(response) => {
                self.establish_session(response.user, &response.token);
                Ok(())
            }
            Err(err) => {
                self.record_failure(&err, i18n::register_failed(self.language));
                Err(err)
            }
        }
    }

    /// Clear storage and return to Anonymous. Synchronous, no server
    /// round-trip, idempotent.
    pub fn logout(&self) {
        tracing::info!("logging out");
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_KEY);
        *self.state.write() = AuthState {
            user: None,
            is_authenticated: false,
            is_loading: false,
            error: None,
        };
    }

    /// Shallow-merge profile fields into the current user, in memory and in
    /// storage. No-op when not authenticated.
    pub fn update_user(&self, update: &UserUpdate) {
        let mut state = self.state.write();
        let Some(user) = state.user.as_mut() else {
            return;
        };
        user.apply(update);
        self.persist_user(user);
    }

    pub fn clear_error(&self) {
        self.state.write().error = None;
    }

    fn begin_attempt(&self) {
        let mut state = self.state.write();
        state.is_loading = true;
        state.error = None;
    }

    fn establish_session(&self, user: User, token: &str) {
        self.store.set(TOKEN_KEY, token);
        self.persist_user(&user);
        self.guard.reset();
        tracing::info!(user_id = %user.id, "session established");
        *self.state.write() = AuthState {
            user: Some(user),
            is_authenticated: true,
            is_loading: false,
            error: None,
        };
    }

    fn record_failure(&self, err: &ApiError, generic: &str) {
        self.guard.observe(err);
        let message = match err {
            ApiError::Server(msg) | ApiError::Validation(msg) => msg.clone(),
            _ => generic.to_string(),
        };
        let mut state = self.state.write();
        state.is_loading = false;
        state.error = Some(message);
    }

    fn persist_user(&self, user: &User) {
        match serde_json::to_string(user) {
            Ok(json) => self.store.set(USER_KEY, &json),
            Err(err) => tracing::error!(error = %err, "failed to serialize user snapshot"),
        }
    }
}
