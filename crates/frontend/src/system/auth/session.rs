use super::storage;

/// Handle to the persisted bearer token.
///
/// Repository adapters receive this at construction instead of reading
/// browser storage ad hoc, so the only place that knows where tokens live
/// is `storage.rs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthSession;

impl AuthSession {
    pub fn new() -> Self {
        Self
    }

    pub fn token(&self) -> Option<String> {
        storage::get_token()
    }

    /// `Authorization` header value, when a token is present. Requests
    /// without a token simply omit the header; the backend rejects what
    /// it must.
    pub fn bearer(&self) -> Option<String> {
        self.token().map(|t| format!("Bearer {}", t))
    }

    pub fn store_token(&self, token: &str) {
        storage::save_token(token);
    }

    pub fn clear(&self) {
        storage::clear_token();
    }
}
