//! # Core Module
//!
//! Cross-cutting building blocks: the error taxonomy, the data-source traits
//! the rest of the crate is written against, and the session coordinator.

pub mod error;
pub mod service;
pub mod session;

pub use error::{ApiError, Result};
pub use service::{AuthApi, ProtocolApi, WalletApi};
pub use session::SessionGuard;
