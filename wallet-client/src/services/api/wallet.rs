//! # Wallet Endpoints
//!
//! Wallet, transaction, analytics, and market-price queries. These shape
//! requests and nothing more; business rules live on the server.

use shared::{AnalyticsData, NewTransaction, PriceData, Transaction, Wallet};

use super::client::HttpApi;
use crate::core::error::Result;

/// The authenticated user's own wallet.
pub async fn get_wallet(client: &HttpApi) -> Result<Wallet> {
    client.get("/wallet/me").await
}

/// Transaction history, newest first. `limit` bounds the page size when set;
/// ordering is server-determined.
pub async fn get_transactions(
    client: &HttpApi,
    limit: Option<usize>,
) -> Result<Vec<Transaction>> {
    let path = match limit {
        Some(limit) => format!("/wallet/transactions?limit={limit}"),
        None => "/wallet/transactions".to_string(),
    };
    client.get(&path).await
}

/// Submit a transaction for processing. The server assigns id, status, and
/// timestamps.
#[tracing::instrument(skip(client, new), fields(kind = ?new.kind, amount = new.amount))]
pub async fn send_transaction(client: &HttpApi, new: &NewTransaction) -> Result<Transaction> {
    client.post("/wallet/transaction", new).await
}

/// Portfolio summary for the dashboard header.
pub async fn get_analytics(client: &HttpApi) -> Result<AnalyticsData> {
    client.get("/wallet/analytics").await
}

/// Spot prices for the supported currencies.
pub async fn get_price_data(client: &HttpApi) -> Result<Vec<PriceData>> {
    client.get("/market/prices").await
}
