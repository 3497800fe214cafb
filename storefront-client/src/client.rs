//! Storefront client facade

use crate::http::{HttpClient, NetworkHttpClient};
use crate::repository::{
    AddressRepository, AuthRepository, CartRepository, OrderRepository, PaymentMethodRepository,
    ProductRepository, ReviewRepository, Session, UserRepository,
};
use crate::token::{InMemoryTokenStore, TokenStore};
use crate::{ClientConfig, ClientResult};
use std::sync::Arc;

/// Entry point bundling every repository over one transport and token store
///
/// # Example
///
/// ```no_run
/// use storefront_client::{ClientConfig, StorefrontClient};
///
/// # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
/// let client = StorefrontClient::new(&ClientConfig::from_env())?;
/// client.auth().sign_in("ada@example.com", "secret").await?;
/// let cart = client.cart().get_cart().await?;
/// println!("{} items", cart.item_count());
/// # Ok(())
/// # }
/// ```
pub struct StorefrontClient<H = NetworkHttpClient> {
    session: Session<H>,
}

impl<H> Clone for StorefrontClient<H> {
    fn clone(&self) -> Self {
        Self {
            session: self.session.clone(),
        }
    }
}

impl StorefrontClient<NetworkHttpClient> {
    /// Network client with an in-memory token store seeded from `config.token`
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let tokens: Arc<dyn TokenStore> = match &config.token {
            Some(token) => Arc::new(InMemoryTokenStore::with_token(token.clone())),
            None => Arc::new(InMemoryTokenStore::new()),
        };
        Self::with_token_store(config, tokens)
    }

    /// Network client over a caller-provided token store
    pub fn with_token_store(config: &ClientConfig, tokens: Arc<dyn TokenStore>) -> ClientResult<Self> {
        let http = NetworkHttpClient::new(config, tokens.clone())?;
        tracing::debug!(base_url = %http.base_url(), "Storefront client created");
        Ok(Self::with_parts(Arc::new(http), tokens))
    }
}

impl<H: HttpClient> StorefrontClient<H> {
    /// Assemble from an existing transport
    ///
    /// `tokens` must be the store the transport reads its bearer token from.
    pub fn with_parts(http: Arc<H>, tokens: Arc<dyn TokenStore>) -> Self {
        Self {
            session: Session::new(http, tokens),
        }
    }

    pub fn auth(&self) -> AuthRepository<H> {
        AuthRepository::new(self.session.clone())
    }

    pub fn products(&self) -> ProductRepository<H> {
        ProductRepository::new(self.session.clone())
    }

    pub fn cart(&self) -> CartRepository<H> {
        CartRepository::new(self.session.clone())
    }

    pub fn addresses(&self) -> AddressRepository<H> {
        AddressRepository::new(self.session.clone())
    }

    pub fn payment_methods(&self) -> PaymentMethodRepository<H> {
        PaymentMethodRepository::new(self.session.clone())
    }

    pub fn orders(&self) -> OrderRepository<H> {
        OrderRepository::new(self.session.clone())
    }

    pub fn reviews(&self) -> ReviewRepository<H> {
        ReviewRepository::new(self.session.clone())
    }

    pub fn user(&self) -> UserRepository<H> {
        UserRepository::new(self.session.clone())
    }

    pub fn tokens(&self) -> &Arc<dyn TokenStore> {
        &self.session.tokens
    }

    pub async fn is_signed_in(&self) -> bool {
        self.session.tokens.get().await.is_some()
    }
}
