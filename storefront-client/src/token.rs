//! Session token storage
//!
//! The client never owns where the token lives. Platforms inject their own
//! [`TokenStore`] (keystore, encrypted preferences, ...); the default keeps
//! it in memory.

use async_trait::async_trait;
use tokio::sync::RwLock;

/// Storage for the session token
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Current token, if signed in
    async fn get(&self) -> Option<String>;

    /// Replace the current token
    async fn save(&self, token: String);

    /// Forget the current token
    async fn clear(&self);

    /// Forget the current token only if it is still `token`
    ///
    /// Returns whether the store was cleared. Implementations backed by a
    /// lock should compare and clear under one write guard.
    async fn clear_if(&self, token: &str) -> bool {
        if self.get().await.as_deref() == Some(token) {
            self.clear().await;
            true
        } else {
            false
        }
    }
}

/// In-memory token store
#[derive(Debug, Default)]
pub struct InMemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl InMemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `token`
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

#[async_trait]
impl TokenStore for InMemoryTokenStore {
    async fn get(&self) -> Option<String> {
        self.token.read().await.clone()
    }

    async fn save(&self, token: String) {
        *self.token.write().await = Some(token);
    }

    async fn clear(&self) {
        *self.token.write().await = None;
    }

    async fn clear_if(&self, token: &str) -> bool {
        let mut current = self.token.write().await;
        if current.as_deref() == Some(token) {
            *current = None;
            true
        } else {
            false
        }
    }
}
