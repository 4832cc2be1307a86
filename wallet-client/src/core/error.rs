//! # Common Error Types
//!
//! Consolidated error handling for the dashboard client.
//!
//! All transport-level failures are interpreted exactly once, inside the HTTP
//! client wrapper ([`crate::services::api::client`]). Everything above the
//! wrapper deals only in the variants below:
//!
//! - **Server**: a response arrived carrying a non-success envelope or an HTTP
//!   error status; the payload's message is preserved when present
//! - **Network**: the request was sent but no response arrived
//! - **Unexpected**: anything else, e.g. a malformed response body
//! - **Unauthorized**: the session is invalid. This is a *returned signal*:
//!   the transport layer performs no side effect, a single
//!   [`crate::core::session::SessionGuard`] observes it and reacts
//! - **NotFound**: the remote side reported absence. Two callers deliberately
//!   map this to `None` instead of surfacing it (active mining session, DNA
//!   profile); everywhere else it surfaces like a server error
//! - **Validation**: client-side input validation failed before any request
//!   was issued

use thiserror::Error;

/// Error type shared by the API wrapper, domain services, and state containers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The server responded with a failure envelope or error status.
    #[error("server error: {0}")]
    Server(String),

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// Malformed response or any other unclassified failure.
    #[error("unexpected error: {0}")]
    Unexpected(String),

    /// The session token was rejected. Observed by the session coordinator.
    #[error("unauthorized")]
    Unauthorized,

    /// The requested entity does not exist on the remote side.
    #[error("not found")]
    NotFound,

    /// Input rejected before a request was issued.
    #[error("validation error: {0}")]
    Validation(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ApiError>;
