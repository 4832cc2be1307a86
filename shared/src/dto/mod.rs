//! # Data Transfer Objects (DTOs)
//!
//! All data structures exchanged with the Orecoin REST API.
//!
//! ## Module Organization
//!
//! - [`auth`] - User, login, and registration DTOs
//! - [`wallet`] - Wallet, transaction, price, and analytics DTOs
//! - [`mining`] - Mining pool and session DTOs
//! - [`protocol`] - DNA profile, security alerts, and network state DTOs
//!
//! ## Serialization Format
//!
//! - **Field naming**: camelCase on the wire (`firstName`, `poolId`, ...)
//! - **Optional fields**: omitted when `None`
//! - **Enums**: lowercase strings (`"pool"`, `"confirmed"`) except [`wallet::Currency`],
//!   which uses upper-case ticker symbols (`"ORE"`, `"BTC"`)
//! - **Timestamps**: RFC 3339 via `chrono::DateTime<Utc>`

pub mod auth;
pub mod mining;
pub mod protocol;
pub mod wallet;

pub use auth::*;
pub use mining::*;
pub use protocol::*;
pub use wallet::*;
