//! # Application State Containers
//!
//! The two process-wide containers the presentation layer reads from:
//!
//! - [`auth::AuthStore`] — session state, persisted across launches
//! - [`protocol::ProtocolStore`] — the aggregated protocol-domain snapshot
//!
//! Both hold their snapshot behind `parking_lot::RwLock` and hand out clones;
//! mutation happens only through their methods.

pub mod auth;
pub mod protocol;

pub use auth::{AuthState, AuthStore};
pub use protocol::{ProtocolSnapshot, ProtocolStore};
