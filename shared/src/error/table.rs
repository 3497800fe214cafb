//! HTTP status tables for error classification

use super::types::ErrorKind;
use http::StatusCode;

/// Rows shared by every operation family
const DEFAULT_ROWS: &[(StatusCode, ErrorKind)] = &[
    (StatusCode::BAD_REQUEST, ErrorKind::InvalidData),
    (StatusCode::UNAUTHORIZED, ErrorKind::InvalidToken),
    (StatusCode::NOT_FOUND, ErrorKind::NotFound),
    (StatusCode::INTERNAL_SERVER_ERROR, ErrorKind::ServerInternal),
];

/// Mapping from HTTP status code to [`ErrorKind`] for one operation family
///
/// Overrides are consulted before the default rows. A status present in
/// neither maps to nothing, and the classifier falls back to
/// `DomainError::HttpError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusTable {
    overrides: &'static [(StatusCode, ErrorKind)],
}

impl StatusTable {
    /// Authenticated calls and anything without a dedicated table
    pub const DEFAULT: Self = Self { overrides: &[] };

    /// Sign-in: a rejected login is not an expired session
    pub const SIGN_IN: Self = Self {
        overrides: &[(StatusCode::UNAUTHORIZED, ErrorKind::InvalidCredentials)],
    };

    /// Sign-up: conflict means the account is taken
    pub const SIGN_UP: Self = Self {
        overrides: &[(StatusCode::CONFLICT, ErrorKind::UserAlreadyExists)],
    };

    /// Look up the kind mapped to a status code
    pub fn lookup(&self, status: u16) -> Option<ErrorKind> {
        self.overrides
            .iter()
            .chain(DEFAULT_ROWS)
            .find(|(code, _)| code.as_u16() == status)
            .map(|(_, kind)| *kind)
    }
}

impl Default for StatusTable {
    fn default() -> Self {
        Self::DEFAULT
    }
}
