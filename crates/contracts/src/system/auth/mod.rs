use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

#[cfg(test)]
use mockall::automock;

/// Username/password pair. Construction fails on blank input, so a
/// credentials value in hand is always worth sending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthCredentials {
    username: String,
    password: String,
}

impl AuthCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> AppResult<Self> {
        let username = username.into();
        let password = password.into();
        if username.trim().is_empty() || password.trim().is_empty() {
            return Err(AppError::validation("Credenciales inválidas"));
        }
        Ok(Self { username, password })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

/// Body for `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response of `POST /auth/login`; the bearer token arrives as `jwt`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub jwt: String,
    #[serde(default)]
    pub id: Option<i64>,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

/// Authenticated principal, held in memory while the session lasts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: Option<i64>,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    /// Bearer token attached to mutating requests.
    #[serde(default)]
    pub token: String,
}

impl From<LoginResponse> for User {
    fn from(r: LoginResponse) -> Self {
        Self {
            id: r.id,
            username: r.username,
            email: r.email,
            roles: r.roles,
            token: r.jwt,
        }
    }
}

/// Authentication contract, implemented over HTTP by the frontend adapter.
#[cfg_attr(test, automock)]
#[async_trait(?Send)]
pub trait AuthRepository {
    /// Exchange credentials for an authenticated user; the adapter
    /// persists the token on success.
    async fn login(&self, credentials: &AuthCredentials) -> AppResult<User>;

    /// Drop the persisted token.
    async fn logout(&self) -> AppResult<()>;

    /// `Ok(None)` when no token is stored or the stored one is no longer
    /// accepted.
    async fn get_current_user(&self) -> AppResult<Option<User>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_reject_blank_username_or_password() {
        assert!(AuthCredentials::new("", "secret").is_err());
        assert!(AuthCredentials::new("admin", "   ").is_err());
        let err = AuthCredentials::new("", "").unwrap_err();
        assert_eq!(err, AppError::Validation("Credenciales inválidas".into()));
    }

    #[test]
    fn credentials_hold_what_was_given() {
        let c = AuthCredentials::new("admin", "secret").unwrap();
        assert_eq!(c.username(), "admin");
        assert_eq!(c.password(), "secret");
    }

    #[test]
    fn login_response_becomes_user_with_token() {
        let r: LoginResponse = serde_json::from_str(
            r#"{"jwt":"abc123","id":1,"username":"admin","roles":["ADMIN"]}"#,
        )
        .unwrap();
        let user = User::from(r);
        assert_eq!(user.token, "abc123");
        assert_eq!(user.username, "admin");
    }
}
