//! # Backend API Client Module
//!
//! HTTP client for the Orecoin REST backend.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs      - Module exports
//! ├── client.rs   - HttpApi struct, envelope unwrapping, error classification
//! ├── auth.rs     - Authentication endpoints (login, register)
//! ├── wallet.rs   - Wallet endpoints (wallet, transactions, analytics, prices)
//! └── protocol.rs - Protocol endpoints (mining, DNA, alerts, network state)
//! ```

pub mod auth;
pub mod client;
pub mod protocol;
pub mod wallet;

pub use client::HttpApi;
