use async_trait::async_trait;
use contracts::error::{AppError, AppResult};
use contracts::system::auth::{AuthCredentials, AuthRepository, LoginRequest, LoginResponse, User};
use gloo_net::http::Request;

use super::session::AuthSession;
use crate::shared::api_utils::api_url;

/// HTTP implementation of the auth contract.
///
/// Token persistence happens here: login stores the `jwt` it receives,
/// logout drops it. The session handle is the only storage access point.
pub struct AuthApiRepository {
    session: AuthSession,
}

impl AuthApiRepository {
    pub fn new(session: AuthSession) -> Self {
        Self { session }
    }
}

#[async_trait(?Send)]
impl AuthRepository for AuthApiRepository {
    async fn login(&self, credentials: &AuthCredentials) -> AppResult<User> {
        let body = LoginRequest {
            username: credentials.username().to_string(),
            password: credentials.password().to_string(),
        };

        let response = Request::post(&api_url("/auth/login"))
            .json(&body)
            .map_err(AppError::transport)?
            .send()
            .await
            .map_err(AppError::transport)?;

        if !response.ok() {
            // The backend sends {"message": "..."} on auth failures.
            let message = response
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|v| v.get("message")?.as_str().map(str::to_string))
                .unwrap_or_else(|| "Error al iniciar sesión".to_string());
            return Err(AppError::http(message));
        }

        let login: LoginResponse = response.json().await.map_err(AppError::transport)?;
        self.session.store_token(&login.jwt);
        Ok(User::from(login))
    }

    async fn logout(&self) -> AppResult<()> {
        self.session.clear();
        Ok(())
    }

    async fn get_current_user(&self) -> AppResult<Option<User>> {
        let Some(token) = self.session.token() else {
            return Ok(None);
        };

        let response = Request::get(&api_url("/me"))
            .header("Authorization", &format!("Bearer {}", token))
            .send()
            .await
            .map_err(AppError::transport)?;

        if !response.ok() {
            return Err(AppError::http("No se pudo obtener el usuario actual"));
        }

        let mut user: User = response.json().await.map_err(AppError::transport)?;
        user.token = token;
        Ok(Some(user))
    }
}
