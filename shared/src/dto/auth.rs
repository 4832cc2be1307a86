use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account holder as returned by the API and persisted locally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_address: Option<String>,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterData {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
}

/// Authentication response (login/register success)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

/// Partial user update applied by profile forms.
///
/// Only the populated fields are merged into the current [`User`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    /// Merge a partial update into this user, field by field.
    pub fn apply(&mut self, update: &UserUpdate) {
        if let Some(email) = &update.email {
            self.email = email.clone();
        }
        if let Some(username) = &update.username {
            self.username = username.clone();
        }
        if let Some(first_name) = &update.first_name {
            self.first_name = first_name.clone();
        }
        if let Some(last_name) = &update.last_name {
            self.last_name = last_name.clone();
        }
        if let Some(avatar) = &update.avatar {
            self.avatar = Some(avatar.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: "1".to_string(),
            email: "a@b.com".to_string(),
            username: "orecoin_user".to_string(),
            first_name: "أحمد".to_string(),
            last_name: "محمد".to_string(),
            avatar: None,
            wallet_address: Some("0x1234".to_string()),
            is_verified: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn user_serializes_camel_case() {
        let json = serde_json::to_value(sample_user()).unwrap();
        assert!(json.get("firstName").is_some());
        assert!(json.get("walletAddress").is_some());
        assert!(json.get("isVerified").is_some());
        // None fields are omitted entirely
        assert!(json.get("avatar").is_none());
    }

    #[test]
    fn apply_merges_only_populated_fields() {
        let mut user = sample_user();
        user.apply(&UserUpdate {
            username: Some("new_name".to_string()),
            ..Default::default()
        });
        assert_eq!(user.username, "new_name");
        assert_eq!(user.email, "a@b.com");
    }
}
