//! User account models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::enums::UserRole;

/// Registered account as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// "First Last" display form
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Registration payload; also the admin panel's "create user" draft.
/// The server only honors `role` when the caller is an admin.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterUser {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    pub password: String,
}

/// Partial profile/admin update; only provided fields are serialized
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateUser {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Option<UserRole>,
    pub password: Option<String>,
}

/// Login payload
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// `/auth/login` response
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_update_serializes_only_provided_fields() {
        let update = UpdateUser {
            email: Some("guest@otd.ru".to_string()),
            ..UpdateUser::default()
        };

        let body = serde_json::to_value(&update).unwrap();
        let object = body.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(object["email"], "guest@otd.ru");
    }

    #[test]
    fn test_register_defaults_to_client_role() {
        let draft = RegisterUser::default();
        assert_eq!(draft.role, UserRole::Client);
    }
}
