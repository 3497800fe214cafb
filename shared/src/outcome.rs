//! Three-state holder for remote results
//!
//! Remote calls return [`ApiResult`]. State holders that need to publish an
//! in-flight marker before the call resolves wrap it in [`Outcome`].

use crate::error::{ApiResult, DomainError};

/// State of a remote call as published to the layer above
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Outcome<T> {
    /// Call in flight, no payload
    #[default]
    Loading,
    /// Call resolved with a value
    Success(T),
    /// Call resolved with a classified failure
    Error(DomainError),
}

impl<T> Outcome<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Borrow the value, if resolved successfully
    pub fn success(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    /// Borrow the error, if resolved with a failure
    pub fn error(&self) -> Option<&DomainError> {
        match self {
            Self::Error(error) => Some(error),
            _ => None,
        }
    }

    /// Map the success value, keeping `Loading` and `Error` as they are
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Loading => Outcome::Loading,
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Error(error) => Outcome::Error(error),
        }
    }

    /// Convert back into a result; `None` while loading
    pub fn into_result(self) -> Option<ApiResult<T>> {
        match self {
            Self::Loading => None,
            Self::Success(value) => Some(Ok(value)),
            Self::Error(error) => Some(Err(error)),
        }
    }
}

impl<T> From<ApiResult<T>> for Outcome<T> {
    fn from(result: ApiResult<T>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Error(error),
        }
    }
}
