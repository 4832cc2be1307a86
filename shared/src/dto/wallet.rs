use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Supported currencies. Serialized as upper-case ticker symbols.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Currency {
    #[serde(rename = "ORE")]
    Ore,
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "ETH")]
    Eth,
    #[serde(rename = "BTC")]
    Btc,
}

/// A user's wallet snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    pub id: String,
    pub user_id: String,
    pub address: String,
    pub balance: f64,
    pub currency: Currency,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Send,
    Receive,
    Mining,
    Exchange,
    Transfer,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Confirmed,
    Failed,
    Cancelled,
}

/// A ledger entry. Amount sign follows the transaction type (negative for
/// outflows); the server is the source of truth for that convention.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub user_id: String,
    pub wallet_id: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub amount: f64,
    pub currency: Currency,
    pub status: TransactionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub fee: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for `POST /wallet/transaction`. The server assigns id,
/// status, and timestamps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub wallet_id: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub amount: f64,
    pub currency: Currency,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<f64>,
}

/// Spot price and 24h movement for one currency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceData {
    pub currency: Currency,
    pub price: f64,
    pub change_24h: f64,
    pub change_percent_24h: f64,
    pub volume: f64,
    pub market_cap: f64,
    pub last_updated: DateTime<Utc>,
}

/// Portfolio summary for the dashboard header cards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsData {
    pub total_balance: f64,
    pub total_transactions: u64,
    pub mining_rewards: f64,
    pub portfolio_value: f64,
    pub performance_24h: f64,
    pub performance_7d: f64,
    pub performance_30d: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_type_is_lowercase_on_wire() {
        assert_eq!(
            serde_json::to_string(&TransactionType::Send).unwrap(),
            "\"send\""
        );
        assert_eq!(serde_json::to_string(&Currency::Ore).unwrap(), "\"ORE\"");
    }

    #[test]
    fn transaction_kind_maps_to_type_field() {
        let json = r#"{
            "id": "tx-1",
            "userId": "1",
            "walletId": "wallet-1",
            "type": "mining",
            "amount": 25.5,
            "currency": "ORE",
            "status": "confirmed",
            "description": "Mining reward from pool Alpha",
            "fee": 0.1,
            "createdAt": "2024-12-11T00:00:00Z",
            "updatedAt": "2024-12-11T00:00:00Z"
        }"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.kind, TransactionType::Mining);
        assert_eq!(tx.status, TransactionStatus::Confirmed);
        assert!(tx.recipient_address.is_none());
    }
}
