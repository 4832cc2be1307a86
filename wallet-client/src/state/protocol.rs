//! # Protocol State Container
//!
//! Aggregates the five protocol-domain reads (DNA profile, mining pools,
//! active session, security alerts, network state) into one
//! consistent-enough snapshot for the dashboard.
//!
//! Fetch policy: all five reads run concurrently and are joined. The profile
//! read may legitimately fail (no profile generated yet) and is swallowed to
//! `None`; a failure of any of the other four keeps previously-loaded data in
//! place and surfaces a single error string. Stale-but-present data beats a
//! blank screen.
//!
//! Responses can arrive after a newer fetch has been issued, so every fetch
//! carries a sequence number and only the latest one is allowed to write its
//! results back.
//!
//! A refresh without a signed-in user only clears the loading flag; loaded
//! fields are left as-is until the next authenticated refresh replaces them.
//! The login screen covers the dashboard in the meantime.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use shared::{
    DeviceType, DnaProfile, MiningMode, MiningPool, MiningSession, ProtocolState, SecurityAlert,
};

use crate::core::error::{ApiError, Result};
use crate::core::service::ProtocolApi;
use crate::core::session::SessionGuard;
use crate::i18n::{self, Language};
use crate::state::auth::AuthStore;

/// Observable snapshot of the protocol domain.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolSnapshot {
    pub dna_profile: Option<DnaProfile>,
    pub mining_pools: Vec<MiningPool>,
    pub active_session: Option<MiningSession>,
    pub security_alerts: Vec<SecurityAlert>,
    pub protocol_state: Option<ProtocolState>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl Default for ProtocolSnapshot {
    fn default() -> Self {
        Self {
            dna_profile: None,
            mining_pools: Vec::new(),
            active_session: None,
            security_alerts: Vec::new(),
            protocol_state: None,
            is_loading: true,
            error: None,
        }
    }
}

/// The protocol container. Depends on the auth container's current user;
/// refresh is expected whenever that identity changes.
pub struct ProtocolStore {
    api: Arc<dyn ProtocolApi>,
    auth: Arc<AuthStore>,
    guard: Arc<SessionGuard>,
    language: Language,
    state: RwLock<ProtocolSnapshot>,
    fetch_seq: AtomicU64,
}

impl ProtocolStore {
    pub fn new(
        api: Arc<dyn ProtocolApi>,
        auth: Arc<AuthStore>,
        guard: Arc<SessionGuard>,
        language: Language,
    ) -> Self {
        Self {
            api,
            auth,
            guard,
            language,
            state: RwLock::new(ProtocolSnapshot::default()),
            fetch_seq: AtomicU64::new(0),
        }
    }

    pub fn snapshot(&self) -> ProtocolSnapshot {
        self.state.read().clone()
    }

    /// Run the full fetch policy. Called on startup, on user change, and on
    /// demand from the dashboard's refresh affordance.
    pub async fn refresh(&self) {
        let seq = self.fetch_seq.fetch_add(1, Ordering::SeqCst) + 1;

        if self.auth.current_user().is_none() {
            let mut state = self.state.write();
            state.is_loading = false;
            return;
        }

        {
            let mut state = self.state.write();
            state.is_loading = true;
            state.error = None;
        }

        let (profile, pools, session, alerts, network) = tokio::join!(
            self.api.dna_profile(),
            self.api.mining_pools(),
            self.api.active_session(),
            self.api.security_alerts(),
            self.api.protocol_state(),
        );

        // A newer refresh was issued while this one was in flight; its
        // results win, ours are discarded.
        if self.fetch_seq.load(Ordering::SeqCst) != seq {
            tracing::debug!(seq, "discarding superseded protocol fetch");
            return;
        }

        match (pools, session, alerts, network) {
            (Ok(pools), Ok(session), Ok(alerts), Ok(network)) => {
                let mut state = self.state.write();
                // Absent profile is expected, not an error.
                state.dna_profile = profile.ok();
                state.mining_pools = pools;
                state.active_session = session;
                state.security_alerts = alerts;
                state.protocol_state = Some(network);
                state.is_loading = false;
            }
            (pools, session, alerts, network) => {
                let error = [
                    pools.map(|_| ()).err(),
                    session.map(|_| ()).err(),
                    alerts.map(|_| ()).err(),
                    network.map(|_| ()).err(),
                ]
                .into_iter()
                .flatten()
                .next();

                if let Some(err) = error {
                    tracing::error!(error = %err, "protocol fetch failed");
                    self.guard.observe(&err);
                    let mut state = self.state.write();
                    state.error = Some(i18n::error_message(&err, self.language));
                    state.is_loading = false;
                }
            }
        }
    }

    /// Start a mining session. Pool mode requires a selected pool; the
    /// violation is rejected here, before any request is issued. On success
    /// the active session is replaced and the pool list re-fetched to pick
    /// up updated miner counts.
    pub async fn start_mining(
        &self,
        pool_id: &str,
        mode: MiningMode,
        device_type: DeviceType,
    ) -> Result<MiningSession> {
        if mode == MiningMode::Pool && pool_id.is_empty() {
            return Err(ApiError::Validation(
                i18n::pool_required(self.language).to_string(),
            ));
        }

        let session = self
            .api
            .start_mining(pool_id, mode, device_type)
            .await
            .inspect_err(|err| self.guard.observe(err))?;

        self.state.write().active_session = Some(session.clone());

        let pools = self
            .api
            .mining_pools()
            .await
            .inspect_err(|err| self.guard.observe(err))?;
        self.state.write().mining_pools = pools;

        Ok(session)
    }

    /// Stop the active session. A no-op without one: zero network calls,
    /// state untouched. On failure the session stays in place and the error
    /// is re-thrown.
    pub async fn stop_mining(&self) -> Result<()> {
        let session_id = self
            .state
            .read()
            .active_session
            .as_ref()
            .map(|s| s.id.clone());

        let Some(session_id) = session_id else {
            return Ok(());
        };

        self.api
            .stop_mining(&session_id)
            .await
            .inspect_err(|err| self.guard.observe(err))?;

        self.state.write().active_session = None;
        Ok(())
    }
}
