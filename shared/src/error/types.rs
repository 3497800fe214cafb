//! Domain error types

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure of a remote operation, as seen by the layer above transport
///
/// Every repository call resolves to either a value or exactly one of
/// these variants. Transport details (status lines, socket errors) never
/// leak past this type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Session token missing, expired or rejected (401)
    #[error("Invalid token")]
    InvalidToken,

    /// Sign-in rejected (401 on sign-in)
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Request payload rejected (400)
    #[error("Invalid data")]
    InvalidData,

    /// Requested resource absent (404)
    #[error("Not found")]
    NotFound,

    /// Registration conflict (409 on sign-up)
    #[error("User already exists")]
    UserAlreadyExists,

    /// Server-side fault (500)
    #[error("Internal server error")]
    ServerInternal,

    /// Write accepted but the echoed response does not match the request
    #[error("Response does not match the request")]
    DataInconsistent,

    /// No HTTP response was obtained
    #[error("No internet connection")]
    NoInternet,

    /// Any HTTP status without a dedicated variant
    #[error("HTTP error {code}: {}", .message.as_deref().unwrap_or("<no message>"))]
    HttpError { code: u16, message: Option<String> },

    /// Any other failure
    #[error("Unknown error: {}", .message.as_deref().unwrap_or("<no message>"))]
    Unknown { message: Option<String> },
}

impl DomainError {
    /// Create an `HttpError` from a raw status code and server message
    pub fn http(code: u16, message: Option<String>) -> Self {
        Self::HttpError { code, message }
    }

    /// Create an `Unknown` error
    pub fn unknown(message: impl Into<String>) -> Self {
        Self::Unknown {
            message: Some(message.into()),
        }
    }

    /// Rebuild a domain error from its kind
    ///
    /// `code` and `message` are only used by the kinds that carry data.
    pub fn from_kind(kind: ErrorKind, code: u16, message: Option<String>) -> Self {
        match kind {
            ErrorKind::InvalidToken => Self::InvalidToken,
            ErrorKind::InvalidCredentials => Self::InvalidCredentials,
            ErrorKind::InvalidData => Self::InvalidData,
            ErrorKind::NotFound => Self::NotFound,
            ErrorKind::UserAlreadyExists => Self::UserAlreadyExists,
            ErrorKind::ServerInternal => Self::ServerInternal,
            ErrorKind::DataInconsistent => Self::DataInconsistent,
            ErrorKind::NoInternet => Self::NoInternet,
            ErrorKind::HttpError => Self::HttpError { code, message },
            ErrorKind::Unknown => Self::Unknown { message },
        }
    }

    /// Get the kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidToken => ErrorKind::InvalidToken,
            Self::InvalidCredentials => ErrorKind::InvalidCredentials,
            Self::InvalidData => ErrorKind::InvalidData,
            Self::NotFound => ErrorKind::NotFound,
            Self::UserAlreadyExists => ErrorKind::UserAlreadyExists,
            Self::ServerInternal => ErrorKind::ServerInternal,
            Self::DataInconsistent => ErrorKind::DataInconsistent,
            Self::NoInternet => ErrorKind::NoInternet,
            Self::HttpError { .. } => ErrorKind::HttpError,
            Self::Unknown { .. } => ErrorKind::Unknown,
        }
    }

    /// Whether the session must be discarded
    pub fn is_session_invalid(&self) -> bool {
        matches!(self, Self::InvalidToken)
    }
}

/// Fieldless discriminant of [`DomainError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidToken,
    InvalidCredentials,
    InvalidData,
    NotFound,
    UserAlreadyExists,
    ServerInternal,
    DataInconsistent,
    NoInternet,
    HttpError,
    Unknown,
}

impl ErrorKind {
    /// Get the string name for this kind
    pub fn name(&self) -> &'static str {
        match self {
            Self::InvalidToken => "invalid_token",
            Self::InvalidCredentials => "invalid_credentials",
            Self::InvalidData => "invalid_data",
            Self::NotFound => "not_found",
            Self::UserAlreadyExists => "user_already_exists",
            Self::ServerInternal => "server_internal",
            Self::DataInconsistent => "data_inconsistent",
            Self::NoInternet => "no_internet",
            Self::HttpError => "http_error",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Result type for remote operations
pub type ApiResult<T> = Result<T, DomainError>;
