//! # Utility Functions
//!
//! - [`envs`]: environment variable helpers
//! - [`validation`]: localized input validation for the auth forms

pub mod envs;
pub mod validation;
