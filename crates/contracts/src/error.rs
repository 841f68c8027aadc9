use thiserror::Error;

/// Failure categories shared by every layer of the application.
///
/// User-facing text travels inside the variant; the variant itself is what
/// callers branch on. The frontend shows `Display` output verbatim in
/// toasts, so the messages stay in the application's language (Spanish).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    /// A business rule rejected the input before any network call.
    #[error("{0}")]
    Validation(String),

    /// The requested entity does not exist on the backend.
    #[error("{0}")]
    NotFound(String),

    /// The operation would collide with existing data (duplicate adviser).
    #[error("{0}")]
    Conflict(String),

    /// The request never completed or the response could not be read.
    #[error("{0}")]
    Transport(String),
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// Wrap a transport failure with the request-error prefix shown to users.
    pub fn transport(detail: impl std::fmt::Display) -> Self {
        Self::Transport(format!("Error en la petición: {}", detail))
    }

    /// A non-2xx status mapped to an operation-specific message (no prefix).
    pub fn http(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }
}

pub type AppResult<T> = Result<T, AppError>;
