//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the dashboard client and the
//! Orecoin backend API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Authentication and user management DTOs
//!   - **[`dto::wallet`]**: Wallet, transaction, price, and analytics DTOs
//!   - **[`dto::mining`]**: Mining pool and mining session DTOs
//!   - **[`dto::protocol`]**: DNA profile, security alert, and network state DTOs
//! - **[`envelope`]**: The uniform `{success, data, message, error}` response wrapper
//!
//! ## Wire Format
//!
//! The backend speaks camelCase JSON, so every struct carries
//! `#[serde(rename_all = "camelCase")]` and enums serialize to the string
//! values the API uses (`"send"`, `"active"`, `"ORE"`, ...). Optional fields
//! are omitted when `None`.

pub mod dto;
pub mod envelope;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a DTO library
// where all exports are meant to be public API
pub use dto::*;
pub use envelope::ApiEnvelope;
