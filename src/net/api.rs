//! REST API helpers for the portal backend.
//!
//! Browser build (`csr`): real HTTP calls via `gloo-net`.
//! Native builds and tests: every call returns `ApiError::Unavailable` since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Calls return an explicit `ApiError` instead of invoking callbacks, so the
//! session store decides how a failed profile fetch affects the session.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AdminRegisterRequest, LoginRequest, Profile, RegisterRequest, TokenResponse};

/// Failure reported by the HTTP collaborator.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("not authenticated")]
    Unauthorized,
    #[error("forbidden")]
    Forbidden,
    #[error("request failed: {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Map a non-success HTTP status to an error.
    #[must_use]
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            other => Self::Status(other),
        }
    }
}

fn endpoint(api_base: &str, path: &str) -> String {
    format!("{}/{}", api_base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(any(test, feature = "csr"))]
fn bearer(credential: &str) -> String {
    format!("Bearer {credential}")
}

/// Trim and validate sign-in form input.
///
/// # Errors
///
/// Returns a user-facing message when either field is blank.
pub fn validate_login_input(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

/// Trim and validate registration form input. A blank group is sent as `null`.
///
/// # Errors
///
/// Returns a user-facing message when a required field is blank.
pub fn validate_register_input(
    email: &str,
    password: &str,
    full_name: &str,
    group: &str,
) -> Result<RegisterRequest, &'static str> {
    let email = email.trim();
    let full_name = full_name.trim();
    if email.is_empty() || password.is_empty() || full_name.is_empty() {
        return Err("Enter email, password and full name.");
    }
    let group = Some(group.trim()).filter(|g| !g.is_empty()).map(str::to_owned);
    Ok(RegisterRequest { email: email.to_owned(), password: password.to_owned(), full_name: full_name.to_owned(), group })
}

/// Trim and validate admin registration input.
///
/// # Errors
///
/// Returns a user-facing message when a required field is blank.
pub fn validate_admin_register_input(
    email: &str,
    password: &str,
    full_name: &str,
    secret_key: &str,
) -> Result<AdminRegisterRequest, &'static str> {
    let base = validate_register_input(email, password, full_name, "")?;
    let secret_key = secret_key.trim();
    if secret_key.is_empty() {
        return Err("Enter the admin secret key.");
    }
    Ok(AdminRegisterRequest {
        email: base.email,
        password: base.password,
        full_name: base.full_name,
        secret_key: secret_key.to_owned(),
    })
}

/// Sign in via `POST {api_base}/auth/login`.
///
/// # Errors
///
/// Returns `ApiError::Unauthorized` for rejected credentials, or a transport error.
pub async fn login(api_base: &str, body: &LoginRequest) -> Result<TokenResponse, ApiError> {
    post_for_token(&endpoint(api_base, "auth/login"), body).await
}

/// Create a member account via `POST {api_base}/auth/register`.
///
/// # Errors
///
/// Returns the backend's rejection status or a transport error.
pub async fn register(api_base: &str, body: &RegisterRequest) -> Result<TokenResponse, ApiError> {
    post_for_token(&endpoint(api_base, "auth/register"), body).await
}

/// Create an admin account via `POST {api_base}/auth/admin/register`.
///
/// # Errors
///
/// Returns `ApiError::Forbidden` for a wrong secret key, or a transport error.
pub async fn register_admin(api_base: &str, body: &AdminRegisterRequest) -> Result<TokenResponse, ApiError> {
    post_for_token(&endpoint(api_base, "auth/admin/register"), body).await
}

/// Fetch the current user from `GET {api_base}/users/me` using the bearer credential.
///
/// # Errors
///
/// Returns `ApiError::Unauthorized` when the credential is no longer accepted.
pub async fn fetch_current_user(api_base: &str, credential: &str) -> Result<Profile, ApiError> {
    let url = endpoint(api_base, "users/me");
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&url)
            .header("Authorization", &bearer(credential))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::from_status(resp.status()));
        }
        resp.json::<Profile>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (url, credential);
        Err(ApiError::Unavailable)
    }
}

async fn post_for_token<T: serde::Serialize>(url: &str, body: &T) -> Result<TokenResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(url)
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::from_status(resp.status()));
        }
        resp.json::<TokenResponse>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (url, body);
        Err(ApiError::Unavailable)
    }
}
