use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Trait scores of a miner's DNA profile, each in 0..=100.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DnaTraits {
    pub resilience: u8,
    pub efficiency: u8,
    pub luck: u8,
}

/// One ancestor entry in a DNA lineage, ordered by generation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DnaLineage {
    pub generation: u32,
    pub ancestor_id: String,
    /// Fraction of the profile inherited from this ancestor (0..=1).
    pub contribution: f64,
}

/// Gamified miner identity rendered by the dashboard. Read-only display data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DnaProfile {
    pub id: String,
    pub user_id: String,
    pub fingerprint: String,
    pub traits: DnaTraits,
    pub lineage: Vec<DnaLineage>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Info,
    Warning,
    Critical,
}

/// Security notice shown in the dashboard alert feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SecurityAlert {
    pub id: String,
    #[serde(rename = "type")]
    pub severity: AlertSeverity,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub is_read: bool,
}

/// Snapshot of global network state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProtocolState {
    pub global_hash_rate: f64,
    pub active_miners: u64,
    pub current_block: u64,
    pub next_halving: DateTime<Utc>,
    pub difficulty: f64,
}
