//! Failure classification
//!
//! Maps a caught transport failure to exactly one [`DomainError`].

use super::operation::Operation;
use super::types::DomainError;

/// Failure caught at a remote-call site, before classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// The server answered with a non-success status
    Http { status: u16, message: Option<String> },

    /// No response was obtained (refused, reset, DNS, timeout)
    Connectivity { message: Option<String> },

    /// Anything else: undecodable body, client-side bug, ...
    Unexpected { message: Option<String> },
}

impl Failure {
    /// Create an HTTP failure with a server message
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: Some(message.into()),
        }
    }

    /// Create a connectivity failure
    pub fn connectivity(message: impl Into<String>) -> Self {
        Self::Connectivity {
            message: Some(message.into()),
        }
    }

    /// Create an unexpected failure
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: Some(message.into()),
        }
    }

    /// HTTP status, if the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message carried by the failure
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Http { message, .. }
            | Self::Connectivity { message }
            | Self::Unexpected { message } => message.as_deref(),
        }
    }
}

/// Classify a failure of `operation`
///
/// Total and pure: the same failure always classifies the same way for the
/// same operation.
pub fn classify(operation: Operation, failure: &Failure) -> DomainError {
    match failure {
        Failure::Http { status, message } => match operation.status_table().lookup(*status) {
            Some(kind) => DomainError::from_kind(kind, *status, message.clone()),
            None => DomainError::HttpError {
                code: *status,
                message: message.clone(),
            },
        },
        Failure::Connectivity { .. } => DomainError::NoInternet,
        Failure::Unexpected { message } => DomainError::Unknown {
            message: message.clone(),
        },
    }
}
