use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A mining pool offered by the protocol.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MiningPool {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Aggregate pool hash rate in hashes per second.
    pub hash_rate: u64,
    pub miners: u32,
    /// Fraction of block rewards paid out to miners (0..=1).
    pub reward_rate: f64,
    /// Pool fee as a fraction (0..=1).
    pub fee: f64,
    pub is_active: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MiningStatus {
    Active,
    Completed,
    Paused,
    Failed,
}

/// Solo and pool mode are mutually exclusive; pool mode requires a selected
/// mining pool, solo mode does not.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MiningMode {
    Solo,
    Pool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    Mobile,
    Tablet,
    Desktop,
    Rig,
}

/// One mining run. Created by "start mining", closed by "stop mining".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MiningSession {
    pub id: String,
    pub user_id: String,
    pub pool_id: String,
    pub start_time: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    pub total_hashes: u64,
    pub reward: f64,
    pub status: MiningStatus,
}

/// Request body for `POST /mining/start`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StartMiningRequest {
    pub pool_id: String,
    pub mode: MiningMode,
    pub device_type: DeviceType,
}

/// Request body for `POST /mining/stop`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StopMiningRequest {
    pub session_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_request_uses_camel_case_keys() {
        let req = StartMiningRequest {
            pool_id: "pool-1".to_string(),
            mode: MiningMode::Pool,
            device_type: DeviceType::Desktop,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["poolId"], "pool-1");
        assert_eq!(json["mode"], "pool");
        assert_eq!(json["deviceType"], "desktop");
    }

    #[test]
    fn session_parses_without_end_time() {
        let json = r#"{
            "id": "mining-1",
            "userId": "1",
            "poolId": "pool-1",
            "startTime": "2024-12-08T00:00:00Z",
            "totalHashes": 500000000,
            "reward": 15.75,
            "status": "active"
        }"#;
        let session: MiningSession = serde_json::from_str(json).unwrap();
        assert_eq!(session.status, MiningStatus::Active);
        assert!(session.end_time.is_none());
    }
}
