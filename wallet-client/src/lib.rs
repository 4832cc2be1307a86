//! # Orecoin Dashboard Client - Library Root
//!
//! The data-flow layer of the Orecoin wallet and mining dashboard: the API
//! client, the domain services, and the two application state containers the
//! (out-of-tree) presentation layer renders from.
//!
//! ## Architecture
//!
//! ```text
//! Presentation (pages/components, out of scope)
//!       │ reads snapshots / calls mutators
//!       ▼
//! state::AuthStore ─── state::ProtocolStore
//!       │                     │
//!       ▼                     ▼
//! core::service traits (AuthApi / WalletApi / ProtocolApi)
//!       │
//!       ├── services::api::HttpApi      - remote REST backend
//!       └── services::fixture::FixtureApi - in-memory fixtures
//!                   │
//!                   ▼
//!        storage::KeyValueStore (token, user snapshot, language)
//! ```
//!
//! ## Core Concepts
//!
//! - **Single choke point**: every network call goes through
//!   [`services::api::client::HttpApi`], which attaches the bearer token,
//!   unwraps the `{success, data, message, error}` envelope, and classifies
//!   failures into [`core::error::ApiError`] exactly once.
//! - **Unauthorized as a signal**: a 401 is returned as
//!   [`core::error::ApiError::Unauthorized`]; the transport performs no side
//!   effect. One [`core::session::SessionGuard`] observes it, clears the
//!   persisted credentials exactly once, and flags that login is required.
//! - **Explicit dependencies**: [`app::bootstrap`] constructs storage, guard,
//!   data sources, and containers once and hands them out; there is no
//!   ambient global state.
//! - **Sequenced fetches**: the protocol container's aggregate fetch carries
//!   a sequence number so a slow response can never overwrite the results of
//!   a newer one.
//!
//! ## Localization
//!
//! The product ships Arabic-first (RTL) with an English fallback; the data
//! layer surfaces its error strings through [`i18n`] and persists the
//! language preference alongside the session.

pub mod app;
pub mod config;
pub mod core;
pub mod i18n;
pub mod services;
pub mod state;
pub mod storage;
pub mod utils;

// Re-export commonly used types for convenience
pub use app::{bootstrap, AppHandles};
pub use config::{ClientConfig, DataSource};
pub use core::{ApiError, Result, SessionGuard};
pub use state::{AuthState, AuthStore, ProtocolSnapshot, ProtocolStore};
