//! # Client Configuration
//!
//! Everything the data layer needs to come up: the API base URL (from the
//! environment, with a local-development default), the fixed request timeout,
//! and which data source to wire in.

use std::time::Duration;

use crate::utils::envs::get_env_or;

/// Environment variable supplying the API base URL.
pub const API_URL_ENV: &str = "ORECOIN_API_URL";
/// Environment variable selecting the data source (`"remote"` or `"fixture"`).
pub const DATA_SOURCE_ENV: &str = "ORECOIN_DATA_SOURCE";

const DEFAULT_API_URL: &str = "http://localhost:3001/api";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Which implementation of the data-source traits to construct.
///
/// Selected once at startup; call sites never branch on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    /// The remote REST backend.
    Remote,
    /// In-memory fixtures, for tests and offline development.
    Fixture,
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub data_source: DataSource,
}

impl ClientConfig {
    /// Build the configuration from the environment.
    pub fn from_env() -> Self {
        let data_source = match get_env_or(DATA_SOURCE_ENV, "remote").as_str() {
            "fixture" => DataSource::Fixture,
            _ => DataSource::Remote,
        };
        Self {
            base_url: get_env_or(API_URL_ENV, DEFAULT_API_URL),
            timeout: REQUEST_TIMEOUT,
            data_source,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: REQUEST_TIMEOUT,
            data_source: DataSource::Remote,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_development() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:3001/api");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.data_source, DataSource::Remote);
    }
}
