//! # Fixture Data Source
//!
//! An in-memory implementation of the data-source traits, selected by
//! configuration for tests and offline development. Holds the same seed data
//! the product demos ship with: one wallet, a short transaction history, two
//! mining pools, one active session, spot prices, and an analytics summary.
//!
//! Beyond the seed data the fixture records every call and can be programmed
//! to fail or delay specific operations, which is what the state-container
//! tests are built on.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::{Mutex, RwLock};
use shared::{
    AlertSeverity, AnalyticsData, AuthResponse, Currency, DeviceType, DnaLineage, DnaProfile,
    DnaTraits, LoginCredentials, MiningMode, MiningPool, MiningSession, MiningStatus,
    NewTransaction, PriceData, ProtocolState, RegisterData, SecurityAlert, Transaction,
    TransactionStatus, TransactionType, User, Wallet,
};

use crate::core::error::{ApiError, Result};
use crate::core::service::{AuthApi, ProtocolApi, WalletApi};

/// Mutable fixture state behind [`FixtureApi`].
#[derive(Debug, Clone)]
pub struct FixtureData {
    pub user: User,
    pub token: String,
    pub wallet: Wallet,
    pub transactions: Vec<Transaction>,
    pub pools: Vec<MiningPool>,
    pub sessions: Vec<MiningSession>,
    pub dna: Option<DnaProfile>,
    pub alerts: Vec<SecurityAlert>,
    pub protocol_state: ProtocolState,
    pub prices: Vec<PriceData>,
    pub analytics: AnalyticsData,
}

impl Default for FixtureData {
    fn default() -> Self {
        let now = Utc::now();
        let user = User {
            id: "1".to_string(),
            email: "demo@orecoin.io".to_string(),
            username: "orecoin_user".to_string(),
            first_name: "أحمد".to_string(),
            last_name: "محمد".to_string(),
            avatar: None,
            wallet_address: Some("0x1234567890123456789012345678901234567890".to_string()),
            is_verified: true,
            created_at: now,
            updated_at: now,
        };

        let wallet = Wallet {
            id: "wallet-1".to_string(),
            user_id: "1".to_string(),
            address: "0x1234567890123456789012345678901234567890".to_string(),
            balance: 1250.75,
            currency: Currency::Ore,
            is_active: true,
            created_at: now - chrono::Duration::days(400),
            updated_at: now,
        };

        let transactions = vec![
            Transaction {
                id: "tx-1".to_string(),
                user_id: "1".to_string(),
                wallet_id: "wallet-1".to_string(),
                kind: TransactionType::Mining,
                amount: 25.5,
                currency: Currency::Ore,
                status: TransactionStatus::Confirmed,
                recipient_address: None,
                sender_address: None,
                transaction_hash: None,
                description: Some("Mining reward from pool Alpha".to_string()),
                fee: 0.1,
                created_at: now - chrono::Duration::days(1),
                updated_at: now - chrono::Duration::days(1),
            },
            Transaction {
                id: "tx-2".to_string(),
                user_id: "1".to_string(),
                wallet_id: "wallet-1".to_string(),
                kind: TransactionType::Receive,
                amount: 100.0,
                currency: Currency::Ore,
                status: TransactionStatus::Confirmed,
                recipient_address: None,
                sender_address: Some("0x9876543210987654321098765432109876543210".to_string()),
                transaction_hash: None,
                description: Some("Payment for services".to_string()),
                fee: 0.05,
                created_at: now - chrono::Duration::days(2),
                updated_at: now - chrono::Duration::days(2),
            },
            Transaction {
                id: "tx-3".to_string(),
                user_id: "1".to_string(),
                wallet_id: "wallet-1".to_string(),
                kind: TransactionType::Send,
                amount: -15.25,
                currency: Currency::Ore,
                status: TransactionStatus::Confirmed,
                recipient_address: Some("0x5555555555555555555555555555555555555555".to_string()),
                sender_address: None,
                transaction_hash: None,
                description: Some("Transfer to exchange".to_string()),
                fee: 0.08,
                created_at: now - chrono::Duration::days(3),
                updated_at: now - chrono::Duration::days(3),
            },
        ];

        let pools = vec![
            MiningPool {
                id: "pool-1".to_string(),
                name: "Alpha Mining Pool".to_string(),
                description: "High-performance mining pool with low fees".to_string(),
                hash_rate: 1_250_000_000,
                miners: 15_420,
                reward_rate: 0.95,
                fee: 0.02,
                is_active: true,
            },
            MiningPool {
                id: "pool-2".to_string(),
                name: "Beta Mining Pool".to_string(),
                description: "Reliable and stable mining pool".to_string(),
                hash_rate: 890_000_000,
                miners: 8_900,
                reward_rate: 0.92,
                fee: 0.025,
                is_active: true,
            },
        ];

        let sessions = vec![MiningSession {
            id: "mining-1".to_string(),
            user_id: "1".to_string(),
            pool_id: "pool-1".to_string(),
            start_time: now - chrono::Duration::days(4),
            end_time: None,
            total_hashes: 500_000_000,
            reward: 15.75,
            status: MiningStatus::Active,
        }];

        let dna = Some(DnaProfile {
            id: "dna-1".to_string(),
            user_id: "1".to_string(),
            fingerprint: "a3f91c7e".to_string(),
            traits: DnaTraits {
                resilience: 80,
                efficiency: 90,
                luck: 50,
            },
            lineage: vec![DnaLineage {
                generation: 1,
                ancestor_id: "dna-0".to_string(),
                contribution: 0.6,
            }],
            created_at: now - chrono::Duration::days(30),
        });

        let alerts = vec![SecurityAlert {
            id: "alert-1".to_string(),
            severity: AlertSeverity::Info,
            message: "New login from a recognized device".to_string(),
            timestamp: now - chrono::Duration::hours(6),
            is_read: false,
        }];

        let protocol_state = ProtocolState {
            global_hash_rate: 4.2e12,
            active_miners: 182_400,
            current_block: 1_284_771,
            next_halving: now + chrono::Duration::days(320),
            difficulty: 3.8e13,
        };

        let prices = vec![
            PriceData {
                currency: Currency::Ore,
                price: 2.45,
                change_24h: 0.15,
                change_percent_24h: 6.52,
                volume: 15_000_000.0,
                market_cap: 245_000_000.0,
                last_updated: now,
            },
            PriceData {
                currency: Currency::Btc,
                price: 67_500.0,
                change_24h: -1_250.0,
                change_percent_24h: -1.82,
                volume: 15_000_000_000.0,
                market_cap: 1_330_000_000_000.0,
                last_updated: now,
            },
            PriceData {
                currency: Currency::Eth,
                price: 3_850.0,
                change_24h: 45.0,
                change_percent_24h: 1.18,
                volume: 8_500_000_000.0,
                market_cap: 463_000_000_000.0,
                last_updated: now,
            },
        ];

        let analytics = AnalyticsData {
            total_balance: 1250.75,
            total_transactions: 45,
            mining_rewards: 342.5,
            portfolio_value: 1250.75,
            performance_24h: 6.52,
            performance_7d: 12.3,
            performance_30d: -5.25,
        };

        Self {
            user,
            token: "fixture-token".to_string(),
            wallet,
            transactions,
            pools,
            sessions,
            dna,
            alerts,
            protocol_state,
            prices,
            analytics,
        }
    }
}

/// In-memory data source implementing [`AuthApi`], [`WalletApi`], and
/// [`ProtocolApi`].
pub struct FixtureApi {
    data: RwLock<FixtureData>,
    calls: Mutex<Vec<&'static str>>,
    failures: RwLock<HashMap<&'static str, ApiError>>,
    delays: RwLock<HashMap<&'static str, Duration>>,
}

impl FixtureApi {
    pub fn new() -> Self {
        Self::with_data(FixtureData::default())
    }

    pub fn with_data(data: FixtureData) -> Self {
        Self {
            data: RwLock::new(data),
            calls: Mutex::new(Vec::new()),
            failures: RwLock::new(HashMap::new()),
            delays: RwLock::new(HashMap::new()),
        }
    }

    /// Make `method` fail with `error` until [`Self::clear_failure`].
    pub fn fail_with(&self, method: &'static str, error: ApiError) {
        self.failures.write().insert(method, error);
    }

    pub fn clear_failure(&self, method: &'static str) {
        self.failures.write().remove(method);
    }

    /// Delay `method` responses, for exercising overlapping fetches.
    pub fn delay(&self, method: &'static str, duration: Duration) {
        self.delays.write().insert(method, duration);
    }

    /// Every operation invoked so far, in order.
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().clone()
    }

    /// How many times `method` has been invoked.
    pub fn call_count(&self, method: &'static str) -> usize {
        self.calls.lock().iter().filter(|m| **m == method).count()
    }

    /// Mutate the fixture state (e.g. drop the DNA profile, swap pool data).
    pub fn mutate(&self, f: impl FnOnce(&mut FixtureData)) {
        f(&mut self.data.write());
    }

    async fn begin(&self, method: &'static str) -> Result<()> {
        self.calls.lock().push(method);
        let delay = self.delays.read().get(method).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        match self.failures.read().get(method) {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

impl Default for FixtureApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthApi for FixtureApi {
    async fn login(&self, credentials: &LoginCredentials) -> Result<AuthResponse> {
        self.begin("login").await?;
        let data = self.data.read();
        let mut user = data.user.clone();
        user.email = credentials.email.clone();
        Ok(AuthResponse {
            user,
            token: data.token.clone(),
        })
    }

    async fn register(&self, reg: &RegisterData) -> Result<AuthResponse> {
        self.begin("register").await?;
        let now = Utc::now();
        let user = User {
            id: uuid::Uuid::new_v4().to_string(),
            email: reg.email.clone(),
            username: reg.username.clone(),
            first_name: reg.first_name.clone(),
            last_name: reg.last_name.clone(),
            avatar: None,
            wallet_address: Some(format!("0x{}", uuid::Uuid::new_v4().simple())),
            is_verified: false,
            created_at: now,
            updated_at: now,
        };
        let token = self.data.read().token.clone();
        self.data.write().user = user.clone();
        Ok(AuthResponse { user, token })
    }
}

#[async_trait]
impl WalletApi for FixtureApi {
    async fn wallet(&self) -> Result<Wallet> {
        self.begin("wallet").await?;
        Ok(self.data.read().wallet.clone())
    }

    async fn transactions(&self, limit: Option<usize>) -> Result<Vec<Transaction>> {
        self.begin("transactions").await?;
        let mut transactions = self.data.read().transactions.clone();
        transactions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        if let Some(limit) = limit {
            transactions.truncate(limit);
        }
        Ok(transactions)
    }

    async fn send_transaction(&self, new: &NewTransaction) -> Result<Transaction> {
        self.begin("send_transaction").await?;
        let now = Utc::now();
        let user_id = self.data.read().user.id.clone();
        let transaction = Transaction {
            id: format!("tx-{}", uuid::Uuid::new_v4().simple()),
            user_id,
            wallet_id: new.wallet_id.clone(),
            kind: new.kind,
            amount: new.amount,
            currency: new.currency,
            status: TransactionStatus::Pending,
            recipient_address: new.recipient_address.clone(),
            sender_address: None,
            transaction_hash: None,
            description: new.description.clone(),
            fee: new.fee.unwrap_or(0.1),
            created_at: now,
            updated_at: now,
        };
        self.data.write().transactions.insert(0, transaction.clone());
        Ok(transaction)
    }

    async fn analytics(&self) -> Result<AnalyticsData> {
        self.begin("analytics").await?;
        Ok(self.data.read().analytics.clone())
    }

    async fn price_data(&self) -> Result<Vec<PriceData>> {
        self.begin("price_data").await?;
        Ok(self.data.read().prices.clone())
    }
}

#[async_trait]
impl ProtocolApi for FixtureApi {
    async fn dna_profile(&self) -> Result<DnaProfile> {
        self.begin("dna_profile").await?;
        self.data.read().dna.clone().ok_or(ApiError::NotFound)
    }

    async fn mining_pools(&self) -> Result<Vec<MiningPool>> {
        self.begin("mining_pools").await?;
        let pools = self.data.read().pools.clone();
        Ok(pools.into_iter().filter(|p| p.is_active).collect())
    }

    async fn active_session(&self) -> Result<Option<MiningSession>> {
        self.begin("active_session").await?;
        Ok(self
            .data
            .read()
            .sessions
            .iter()
            .find(|s| s.status == MiningStatus::Active)
            .cloned())
    }

    async fn start_mining(
        &self,
        pool_id: &str,
        _mode: MiningMode,
        _device_type: DeviceType,
    ) -> Result<MiningSession> {
        self.begin("start_mining").await?;
        let user_id = self.data.read().user.id.clone();
        let session = MiningSession {
            id: format!("mining-{}", uuid::Uuid::new_v4().simple()),
            user_id,
            pool_id: pool_id.to_string(),
            start_time: Utc::now(),
            end_time: None,
            total_hashes: 0,
            reward: 0.0,
            status: MiningStatus::Active,
        };
        self.data.write().sessions.push(session.clone());
        Ok(session)
    }

    async fn stop_mining(&self, session_id: &str) -> Result<()> {
        self.begin("stop_mining").await?;
        let mut data = self.data.write();
        if let Some(session) = data.sessions.iter_mut().find(|s| s.id == session_id) {
            session.status = MiningStatus::Completed;
            session.end_time = Some(Utc::now());
        }
        Ok(())
    }

    async fn security_alerts(&self) -> Result<Vec<SecurityAlert>> {
        self.begin("security_alerts").await?;
        Ok(self.data.read().alerts.clone())
    }

    async fn protocol_state(&self) -> Result<ProtocolState> {
        self.begin("protocol_state").await?;
        Ok(self.data.read().protocol_state.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn transactions_are_newest_first_and_bounded() {
        let api = FixtureApi::new();
        let all = api.transactions(None).await.unwrap();
        assert_eq!(all.len(), 3);
        assert!(all[0].created_at > all[1].created_at);

        let limited = api.transactions(Some(2)).await.unwrap();
        assert_eq!(limited.len(), 2);
        assert_eq!(limited[0].id, all[0].id);
    }

    #[tokio::test]
    async fn inactive_pools_are_filtered_out() {
        let api = FixtureApi::new();
        api.mutate(|data| data.pools[1].is_active = false);
        let pools = api.mining_pools().await.unwrap();
        assert_eq!(pools.len(), 1);
        assert_eq!(pools[0].id, "pool-1");
    }

    #[tokio::test]
    async fn start_and_stop_update_session_state() {
        let api = FixtureApi::new();
        api.mutate(|data| data.sessions.clear());
        assert!(api.active_session().await.unwrap().is_none());

        let session = api
            .start_mining("pool-2", MiningMode::Pool, DeviceType::Desktop)
            .await
            .unwrap();
        assert_eq!(session.pool_id, "pool-2");
        assert!(api.active_session().await.unwrap().is_some());

        api.stop_mining(&session.id).await.unwrap();
        assert!(api.active_session().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn programmed_failures_stick_until_cleared() {
        let api = FixtureApi::new();
        api.fail_with("wallet", ApiError::Network("down".to_string()));
        assert!(api.wallet().await.is_err());
        assert!(api.wallet().await.is_err());

        api.clear_failure("wallet");
        assert!(api.wallet().await.is_ok());
        assert_eq!(api.call_count("wallet"), 3);
    }

    #[tokio::test]
    async fn missing_dna_profile_reports_not_found() {
        let api = FixtureApi::new();
        api.mutate(|data| data.dna = None);
        assert_eq!(api.dna_profile().await.unwrap_err(), ApiError::NotFound);
    }
}
