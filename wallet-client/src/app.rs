//! # Composition Root
//!
//! Builds the whole data layer once, at application start, with every
//! dependency explicit: storage → session guard → data sources → state
//! containers. Nothing here (or anywhere else) reaches into an ambient
//! global registry; consumers receive these handles by injection.

use std::sync::Arc;

use crate::config::ClientConfig;
use crate::core::service::WalletApi;
use crate::core::session::SessionGuard;
use crate::i18n::{self, Language};
use crate::services::{self, DataSources};
use crate::state::{AuthStore, ProtocolStore};
use crate::storage::KeyValueStore;

/// Everything the presentation layer needs, constructed exactly once.
pub struct AppHandles {
    pub store: Arc<dyn KeyValueStore>,
    pub guard: Arc<SessionGuard>,
    pub auth: Arc<AuthStore>,
    pub protocol: Arc<ProtocolStore>,
    pub wallet: Arc<dyn WalletApi>,
    pub language: Language,
}

/// Wire the data layer together and restore any persisted session.
///
/// The session is rehydrated synchronously from storage; callers follow up
/// with `protocol.refresh().await` once they are ready to load the dashboard.
pub fn bootstrap(config: &ClientConfig, store: Arc<dyn KeyValueStore>) -> AppHandles {
    let language = i18n::load(store.as_ref());
    let guard = Arc::new(SessionGuard::new(store.clone()));

    let DataSources {
        auth,
        wallet,
        protocol,
    } = services::connect(config, store.clone());

    let auth = Arc::new(AuthStore::new(
        auth,
        store.clone(),
        guard.clone(),
        language,
    ));
    auth.rehydrate();

    let protocol = Arc::new(ProtocolStore::new(
        protocol,
        auth.clone(),
        guard.clone(),
        language,
    ));

    AppHandles {
        store,
        guard,
        auth,
        protocol,
        wallet,
        language,
    }
}
