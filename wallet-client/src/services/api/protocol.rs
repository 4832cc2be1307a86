//! # Protocol Endpoints
//!
//! Mining pools and sessions, DNA profile, security alerts, and global
//! network state under `/v1/{mining,dna,security,protocol}/*`.

use shared::{
    DeviceType, DnaProfile, MiningMode, MiningPool, MiningSession, ProtocolState, SecurityAlert,
    StartMiningRequest, StopMiningRequest,
};

use super::client::HttpApi;
use crate::core::error::{ApiError, Result};

/// The caller's DNA profile. Fails with [`ApiError::NotFound`] when no
/// profile has been generated yet; the protocol container tolerates that.
pub async fn get_dna_profile(client: &HttpApi) -> Result<DnaProfile> {
    client.get("/dna/profile").await
}

/// Currently offered mining pools.
pub async fn get_mining_pools(client: &HttpApi) -> Result<Vec<MiningPool>> {
    client.get("/mining/pools").await
}

/// The caller's active mining session.
///
/// "No active session" is an expected condition, not an error: a remote
/// not-found maps to `Ok(None)`. This is the one read with a
/// swallow-and-default policy.
pub async fn get_active_session(client: &HttpApi) -> Result<Option<MiningSession>> {
    match client.get::<MiningSession>("/mining/session/active").await {
        Ok(session) => Ok(Some(session)),
        Err(ApiError::NotFound) => Ok(None),
        Err(err) => Err(err),
    }
}

/// Open a mining session. `pool_id`, `mode`, and `device_type` are passed
/// through uninterpreted.
#[tracing::instrument(skip(client), fields(pool_id = %pool_id, mode = ?mode))]
pub async fn start_mining(
    client: &HttpApi,
    pool_id: &str,
    mode: MiningMode,
    device_type: DeviceType,
) -> Result<MiningSession> {
    let request = StartMiningRequest {
        pool_id: pool_id.to_string(),
        mode,
        device_type,
    };
    client.post("/mining/start", &request).await
}

/// Close a mining session.
#[tracing::instrument(skip(client), fields(session_id = %session_id))]
pub async fn stop_mining(client: &HttpApi, session_id: &str) -> Result<()> {
    let request = StopMiningRequest {
        session_id: session_id.to_string(),
    };
    client.post("/mining/stop", &request).await
}

/// Security notices for the alert feed.
pub async fn get_security_alerts(client: &HttpApi) -> Result<Vec<SecurityAlert>> {
    client.get("/security/alerts").await
}

/// Global network state snapshot.
pub async fn get_protocol_state(client: &HttpApi) -> Result<ProtocolState> {
    client.get("/protocol/state").await
}
