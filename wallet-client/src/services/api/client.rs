//! # API Client
//!
//! The single choke point for all network I/O. Every request goes through
//! [`HttpApi::get`]/[`HttpApi::post`], which attach the bearer token, enforce
//! the fixed timeout, unwrap the `{success, data, message, error}` envelope,
//! and translate transport failures into [`ApiError`] exactly once.
//!
//! The wrapper is deliberately dumb: no retry, no backoff, no deduplication,
//! no cancellation. An unauthorized response is returned as
//! [`ApiError::Unauthorized`] for the session coordinator to observe; the
//! wrapper itself never mutates storage or navigates.

use std::sync::Arc;

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::ApiEnvelope;

use crate::config::ClientConfig;
use crate::core::error::{ApiError, Result};
use crate::core::service::{AuthApi, ProtocolApi, WalletApi};
use crate::storage::{KeyValueStore, TOKEN_KEY};

/// HTTP implementation of the data-source traits.
///
/// Maintains a connection pool for HTTP/2 multiplexing; cheap to clone via
/// `Arc`.
pub struct HttpApi {
    pub(crate) client: Client,
    base_url: String,
    store: Arc<dyn KeyValueStore>,
}

impl HttpApi {
    /// Create a client against the configured base URL.
    ///
    /// The fixed timeout prevents a hung request from freezing a caller that
    /// awaits it; the caller owns any cancellation beyond that.
    pub fn new(config: &ClientConfig, store: Arc<dyn KeyValueStore>) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            store,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/v1{}", self.base_url, path)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.dispatch(self.client.get(self.url(path))).await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.dispatch(self.client.post(self.url(path)).json(body)).await
    }

    async fn dispatch<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let request = match self.store.get(TOKEN_KEY) {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await.map_err(|err| {
            tracing::error!(error = %err, "request failed to reach the server");
            ApiError::Network(err.to_string())
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;

        unwrap_envelope(status, &body)
    }
}

/// Classify a response and unwrap its envelope. Pure so it is testable
/// without a server.
///
/// Order matters: the status-level signals (401, 404) win over whatever the
/// body says, then the envelope's own `success` flag, then payload decoding.
pub(crate) fn unwrap_envelope<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T> {
    if status == StatusCode::UNAUTHORIZED {
        return Err(ApiError::Unauthorized);
    }
    if status == StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound);
    }

    let envelope: ApiEnvelope<serde_json::Value> = match serde_json::from_str(body) {
        Ok(envelope) => envelope,
        Err(err) => {
            return Err(if status.is_success() {
                ApiError::Unexpected(format!("malformed response: {err}"))
            } else {
                ApiError::Server(format!("HTTP {}", status.as_u16()))
            });
        }
    };

    if !status.is_success() || !envelope.success {
        let message = envelope
            .message
            .or(envelope.error)
            .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
        tracing::warn!(status = status.as_u16(), error = %message, "server rejected request");
        return Err(ApiError::Server(message));
    }

    // Endpoints like POST /mining/stop return a bare success envelope; Null
    // decodes cleanly into () or Option<T>.
    let data = envelope.data.unwrap_or(serde_json::Value::Null);
    serde_json::from_value(data).map_err(|err| ApiError::Unexpected(format!("malformed payload: {err}")))
}

// Trait implementations delegate to the endpoint modules, mirroring the
// api/{auth,wallet,protocol}.rs split.

#[async_trait::async_trait]
impl AuthApi for HttpApi {
    async fn login(&self, credentials: &shared::LoginCredentials) -> Result<shared::AuthResponse> {
        super::auth::login(self, credentials).await
    }

    async fn register(&self, data: &shared::RegisterData) -> Result<shared::AuthResponse> {
        super::auth::register(self, data).await
    }
}

#[async_trait::async_trait]
impl WalletApi for HttpApi {
    async fn wallet(&self) -> Result<shared::Wallet> {
        super::wallet::get_wallet(self).await
    }

    async fn transactions(&self, limit: Option<usize>) -> Result<Vec<shared::Transaction>> {
        super::wallet::get_transactions(self, limit).await
    }

    async fn send_transaction(&self, new: &shared::NewTransaction) -> Result<shared::Transaction> {
        super::wallet::send_transaction(self, new).await
    }

    async fn analytics(&self) -> Result<shared::AnalyticsData> {
        super::wallet::get_analytics(self).await
    }

    async fn price_data(&self) -> Result<Vec<shared::PriceData>> {
        super::wallet::get_price_data(self).await
    }
}

#[async_trait::async_trait]
impl ProtocolApi for HttpApi {
    async fn dna_profile(&self) -> Result<shared::DnaProfile> {
        super::protocol::get_dna_profile(self).await
    }

    async fn mining_pools(&self) -> Result<Vec<shared::MiningPool>> {
        super::protocol::get_mining_pools(self).await
    }

    async fn active_session(&self) -> Result<Option<shared::MiningSession>> {
        super::protocol::get_active_session(self).await
    }

    async fn start_mining(
        &self,
        pool_id: &str,
        mode: shared::MiningMode,
        device_type: shared::DeviceType,
    ) -> Result<shared::MiningSession> {
        super::protocol::start_mining(self, pool_id, mode, device_type).await
    }

    async fn stop_mining(&self, session_id: &str) -> Result<()> {
        super::protocol::stop_mining(self, session_id).await
    }

    async fn security_alerts(&self) -> Result<Vec<shared::SecurityAlert>> {
        super::protocol::get_security_alerts(self).await
    }

    async fn protocol_state(&self) -> Result<shared::ProtocolState> {
        super::protocol::get_protocol_state(self).await
    }
}
