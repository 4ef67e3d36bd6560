//! Shared DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's auth and user payloads. The persisted
//! session profile reuses `Profile` so a reload round-trips through the same
//! serde shape the API returns.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account role reported by the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Event administrator.
    Admin,
    /// Regular participant. The backend reports these accounts as `"student"`.
    #[default]
    #[serde(alias = "student")]
    Member,
    /// Any role string this client does not recognize.
    #[serde(other)]
    Unknown,
}

/// The authenticated user as returned by `/api/users/me` and the auth endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Backend user identifier.
    #[serde(default)]
    pub id: i64,
    /// Sign-in email address.
    #[serde(default)]
    pub email: String,
    /// Display name.
    #[serde(default)]
    pub full_name: String,
    /// Study group (e.g. `"1F1"`), if any.
    #[serde(default)]
    pub group: Option<String>,
    pub role: Role,
    /// ISO 8601 account creation timestamp, if provided.
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Profile {
    /// Minimal profile carrying only a role.
    #[must_use]
    pub fn with_role(role: Role) -> Self {
        Self { role, ..Self::default() }
    }
}

/// Response body of the login and registration endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub user: Profile,
}

fn default_token_type() -> String {
    "bearer".to_owned()
}

/// `POST /auth/login` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /auth/register` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub group: Option<String>,
}

/// `POST /auth/admin/register` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AdminRegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub secret_key: String,
}
