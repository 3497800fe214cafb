//! Shared types for the storefront client
//!
//! Pure logic with no I/O: the error taxonomy and its classifier, the
//! three-state [`Outcome`], response consistency checks, and the domain
//! models exchanged with the backend.

pub mod consistency;
pub mod error;
pub mod models;
pub mod outcome;
pub mod response;

// Re-exports
pub use consistency::{IsConsistentWith, ensure_consistent};
pub use error::{ApiResult, DomainError, ErrorKind, Failure, Operation, StatusTable, classify};
pub use http;
pub use outcome::Outcome;
pub use rust_decimal::Decimal;
pub use serde::{Deserialize, Serialize};
