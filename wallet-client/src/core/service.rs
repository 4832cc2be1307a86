//! # Data-Source Traits
//!
//! The pluggable seam between the state containers and whatever supplies
//! their data. Two implementations exist:
//!
//! - [`crate::services::api::HttpApi`] — the remote REST backend
//! - [`crate::services::fixture::FixtureApi`] — in-memory fixtures for tests
//!   and offline development
//!
//! The implementation is selected once, at construction time, by
//! [`crate::services::connect`]; call sites never branch on the data source.

use async_trait::async_trait;
use shared::{
    AnalyticsData, AuthResponse, DeviceType, DnaProfile, LoginCredentials, MiningMode,
    MiningPool, MiningSession, NewTransaction, PriceData, ProtocolState, RegisterData,
    SecurityAlert, Transaction, Wallet,
};

use crate::core::error::Result;

/// Authentication operations.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange credentials for a user snapshot and a bearer token.
    async fn login(&self, credentials: &LoginCredentials) -> Result<AuthResponse>;

    /// Create an account and log in as it.
    async fn register(&self, data: &RegisterData) -> Result<AuthResponse>;
}

/// Wallet-domain reads and writes.
#[async_trait]
pub trait WalletApi: Send + Sync {
    /// The caller's own wallet, fetched fresh on every read.
    async fn wallet(&self) -> Result<Wallet>;

    /// Transaction history, newest first, optionally bounded.
    async fn transactions(&self, limit: Option<usize>) -> Result<Vec<Transaction>>;

    /// Submit a transaction. No client-side validation beyond serialization.
    async fn send_transaction(&self, new: &NewTransaction) -> Result<Transaction>;

    /// Portfolio summary for the dashboard.
    async fn analytics(&self) -> Result<AnalyticsData>;

    /// Spot prices for the supported currencies.
    async fn price_data(&self) -> Result<Vec<PriceData>>;
}

/// Protocol-domain operations (mining, DNA, alerts, network state).
#[async_trait]
pub trait ProtocolApi: Send + Sync {
    /// The caller's DNA profile. May legitimately not exist yet; callers
    /// tolerate failure and default to absent.
    async fn dna_profile(&self) -> Result<DnaProfile>;

    /// Currently offered mining pools.
    async fn mining_pools(&self) -> Result<Vec<MiningPool>>;

    /// The caller's active mining session. Remote "not found" maps to
    /// `Ok(None)` here, never to an error.
    async fn active_session(&self) -> Result<Option<MiningSession>>;

    /// Start a mining session. `pool_id` is passed through uninterpreted;
    /// pool-mode validation happens in the protocol state container.
    async fn start_mining(
        &self,
        pool_id: &str,
        mode: MiningMode,
        device_type: DeviceType,
    ) -> Result<MiningSession>;

    /// Close a mining session.
    async fn stop_mining(&self, session_id: &str) -> Result<()>;

    /// Security notices for the alert feed.
    async fn security_alerts(&self) -> Result<Vec<SecurityAlert>>;

    /// Global network state snapshot.
    async fn protocol_state(&self) -> Result<ProtocolState>;
}
