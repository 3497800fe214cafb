//! Error taxonomy for the storefront client
//!
//! This module provides the failure channel of every remote call:
//! - [`DomainError`]: Closed set of failures surfaced to callers
//! - [`ErrorKind`]: Fieldless mirror of [`DomainError`], used in status tables
//! - [`Failure`]: Transport outcome caught at the call site
//! - [`StatusTable`]: Per-operation mapping from HTTP status to [`ErrorKind`]
//! - [`Operation`]: Every remote call, each bound to one status table
//!
//! # Example
//!
//! ```
//! use shared::error::{classify, DomainError, Failure, Operation};
//!
//! let failure = Failure::http(401, "unauthorized");
//! assert_eq!(classify(Operation::SignIn, &failure), DomainError::InvalidCredentials);
//! assert_eq!(classify(Operation::GetAddresses, &failure), DomainError::InvalidToken);
//!
//! let failure = Failure::connectivity("connection refused");
//! assert_eq!(classify(Operation::GetCart, &failure), DomainError::NoInternet);
//! ```

mod classify;
mod operation;
mod table;
mod types;

pub use classify::{Failure, classify};
pub use operation::Operation;
pub use table::StatusTable;
pub use types::{ApiResult, DomainError, ErrorKind};
