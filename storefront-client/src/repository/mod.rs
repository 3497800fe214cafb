//! Repositories, one per backend resource family
//!
//! Each method issues exactly one request (or none, for local validation
//! failures) and resolves to an [`ApiResult`].

mod address;
mod auth;
mod cart;
mod order;
mod payment_method;
mod product;
mod review;
mod user;

pub use address::AddressRepository;
pub use auth::AuthRepository;
pub use cart::CartRepository;
pub use order::OrderRepository;
pub use payment_method::PaymentMethodRepository;
pub use product::ProductRepository;
pub use review::ReviewRepository;
pub use user::UserRepository;

use crate::http::HttpClient;
use crate::remote;
use crate::token::TokenStore;
use shared::{ApiResult, DomainError, Failure, Operation};
use std::future::Future;
use std::sync::Arc;

/// Transport and token store shared by all repositories
pub(crate) struct Session<H> {
    pub(crate) http: Arc<H>,
    pub(crate) tokens: Arc<dyn TokenStore>,
}

impl<H> Clone for Session<H> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            tokens: self.tokens.clone(),
        }
    }
}

impl<H: HttpClient> Session<H> {
    pub(crate) fn new(http: Arc<H>, tokens: Arc<dyn TokenStore>) -> Self {
        Self { http, tokens }
    }

    /// Run one remote call through the wrapper
    ///
    /// An authenticated call rejected with `InvalidToken` drops the token it
    /// was sent with. A token saved while the call was in flight survives.
    pub(crate) async fn call<T, F>(&self, operation: Operation, request: F) -> ApiResult<T>
    where
        F: Future<Output = Result<T, Failure>>,
    {
        // Transport futures are lazy and read the store on first poll
        let sent = if operation.is_authenticated() {
            self.tokens.get().await
        } else {
            None
        };

        let result = remote::call(operation, request).await;
        if let Err(DomainError::InvalidToken) = &result
            && let Some(sent) = sent.as_deref()
        {
            if self.tokens.clear_if(sent).await {
                tracing::info!(operation = %operation, "Session token rejected, signed out");
            } else {
                tracing::debug!(operation = %operation, "Stale token rejected, newer session kept");
            }
        }
        result
    }
}
