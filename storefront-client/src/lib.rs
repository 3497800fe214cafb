//! Storefront client
//!
//! Typed access to the shopping backend. Every call resolves to an
//! [`ApiResult`]; transport failures are classified into [`DomainError`]
//! per operation, and create/update echoes are checked against the request.
//!
//! # Transports
//!
//! - [`NetworkHttpClient`] (reqwest)
//! - `OneshotHttpClient` (axum Router in the same process, feature `in-process`)

pub mod client;
pub mod config;
pub mod error;
pub mod http;
#[cfg(feature = "in-process")]
pub mod oneshot;
pub mod remote;
pub mod repository;
pub mod token;

pub use client::StorefrontClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient};
#[cfg(feature = "in-process")]
pub use oneshot::OneshotHttpClient;
pub use token::{InMemoryTokenStore, TokenStore};

// Re-export shared types for convenience
pub use shared::models;
pub use shared::{ApiResult, Decimal, DomainError, ErrorKind, Failure, Operation, Outcome};
