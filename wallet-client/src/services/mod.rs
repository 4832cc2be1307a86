//! # Services
//!
//! Data-source implementations behind the [`crate::core::service`] traits:
//!
//! - [`api`]: the remote REST backend
//! - [`fixture`]: in-memory fixtures for tests and offline development
//!
//! [`connect`] is the single place the implementation is chosen.

use std::sync::Arc;

use crate::config::{ClientConfig, DataSource};
use crate::core::service::{AuthApi, ProtocolApi, WalletApi};
use crate::storage::KeyValueStore;

pub mod api;
pub mod fixture;

pub use api::HttpApi;
pub use fixture::FixtureApi;

/// The three domain facades handed to the state containers.
#[derive(Clone)]
pub struct DataSources {
    pub auth: Arc<dyn AuthApi>,
    pub wallet: Arc<dyn WalletApi>,
    pub protocol: Arc<dyn ProtocolApi>,
}

/// Construct the configured data source. Call sites receive trait objects
/// and never branch on which implementation is behind them.
pub fn connect(config: &ClientConfig, store: Arc<dyn KeyValueStore>) -> DataSources {
    match config.data_source {
        DataSource::Remote => {
            let http = Arc::new(HttpApi::new(config, store));
            DataSources {
                auth: http.clone(),
                wallet: http.clone(),
                protocol: http,
            }
        }
        DataSource::Fixture => {
            let fixture = Arc::new(FixtureApi::new());
            DataSources {
                auth: fixture.clone(),
                wallet: fixture.clone(),
                protocol: fixture,
            }
        }
    }
}
