//! Data models
//!
//! Wire types of the storefront backend, used as domain values directly.
//! All IDs are `i64`, timestamps are Unix milliseconds, money is
//! `rust_decimal::Decimal` carried as a JSON number, dates are ISO strings.

pub mod address;
pub mod auth;
pub mod cart;
pub mod order;
pub mod payment_method;
pub mod product;
pub mod review;
pub mod user;

// Re-exports
pub use address::*;
pub use auth::*;
pub use cart::*;
pub use order::*;
pub use payment_method::*;
pub use product::*;
pub use review::*;
pub use user::*;
