//! # Environment Variables
//!
//! Utilities for reading environment variables.

use std::env;

/// Get an environment variable, falling back to a default when absent.
pub fn get_env_or(name: &'static str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_variable_yields_the_default() {
        assert_eq!(get_env_or("ORECOIN_ENVS_TEST_ABSENT", "fallback"), "fallback");
    }

    #[test]
    fn set_variable_wins_over_the_default() {
        env::set_var("ORECOIN_ENVS_TEST_SET", "from-env");
        assert_eq!(get_env_or("ORECOIN_ENVS_TEST_SET", "fallback"), "from-env");
        env::remove_var("ORECOIN_ENVS_TEST_SET");
    }
}
