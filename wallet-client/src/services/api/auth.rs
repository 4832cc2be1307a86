//! # Authentication Endpoints
//!
//! Login and registration against `/v1/auth/*`.

use shared::{AuthResponse, LoginCredentials, RegisterData};

use super::client::HttpApi;
use crate::core::error::Result;

/// Login with email and password.
#[tracing::instrument(skip(client, credentials), fields(email = %credentials.email))]
pub async fn login(client: &HttpApi, credentials: &LoginCredentials) -> Result<AuthResponse> {
    tracing::info!("Attempting login");
    let start = std::time::Instant::now();

    let result: Result<AuthResponse> = client.post("/auth/login", credentials).await;

    match &result {
        Ok(_) => {
            tracing::info!(duration_ms = start.elapsed().as_millis(), "Login successful")
        }
        Err(err) => tracing::warn!(
            error = %err,
            duration_ms = start.elapsed().as_millis(),
            "Login failed"
        ),
    }
    result
}

/// Register a new account.
#[tracing::instrument(skip(client, data), fields(email = %data.email, username = %data.username))]
pub async fn register(client: &HttpApi, data: &RegisterData) -> Result<AuthResponse> {
    client.post("/auth/register", data).await
}
