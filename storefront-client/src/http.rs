//! HTTP transport
//!
//! Transports report raw [`Failure`]s; classification happens one layer up,
//! where the operation is known.

use crate::token::TokenStore;
use crate::{ClientConfig, ClientError, ClientResult};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::Failure;
use shared::response::server_message;
use std::sync::Arc;
use std::time::Duration;

/// HTTP transport used by the repositories
///
/// Paths are relative to the backend base URL (e.g. `"cart/items"`).
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get<T: DeserializeOwned + Send>(&self, path: &str) -> Result<T, Failure>;
    async fn get_with_query<T: DeserializeOwned + Send, Q: Serialize + Sync>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T, Failure>;
    async fn post<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Failure>;
    async fn put<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Failure>;
    async fn delete<T: DeserializeOwned + Send>(&self, path: &str) -> Result<T, Failure>;
    /// DELETE whose success body is ignored (typically 204)
    async fn delete_empty(&self, path: &str) -> Result<(), Failure>;
}

/// Decode a success body
pub(crate) fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, Failure> {
    serde_json::from_slice(body)
        .map_err(|e| Failure::unexpected(format!("Failed to decode response body: {}", e)))
}

/// Build the failure for a non-success status
pub(crate) fn status_failure(status: u16, body: &[u8]) -> Failure {
    Failure::Http {
        status,
        message: server_message(&String::from_utf8_lossy(body)),
    }
}

/// Network HTTP client backed by reqwest
#[derive(Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
}

impl std::fmt::Debug for NetworkHttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NetworkHttpClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl NetworkHttpClient {
    pub fn new(config: &ClientConfig, tokens: Arc<dyn TokenStore>) -> ClientResult<Self> {
        let base_url = config.normalized_base_url();
        let parsed = Url::parse(base_url).map_err(|e| ClientError::InvalidUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::InvalidUrl {
                url: config.base_url.clone(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
            tokens,
        })
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut req = self.client.request(method, self.url(path));
        if let Some(token) = self.tokens.get().await {
            req = req.bearer_auth(token);
        }
        req
    }

    async fn send(&self, req: RequestBuilder) -> Result<Vec<u8>, Failure> {
        let response = req.send().await.map_err(map_transport_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;

        if !status.is_success() {
            return Err(status_failure(status.as_u16(), &body));
        }
        Ok(body.to_vec())
    }
}

/// Map a reqwest error raised before a status could be read
fn map_transport_error(error: reqwest::Error) -> Failure {
    if error.is_timeout() || error.is_connect() || error.is_request() || error.is_body() {
        Failure::connectivity(error.to_string())
    } else if let Some(status) = error.status() {
        Failure::http(status.as_u16(), error.to_string())
    } else {
        Failure::unexpected(error.to_string())
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get<T: DeserializeOwned + Send>(&self, path: &str) -> Result<T, Failure> {
        let req = self.request(Method::GET, path).await;
        decode_body(&self.send(req).await?)
    }

    async fn get_with_query<T: DeserializeOwned + Send, Q: Serialize + Sync>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T, Failure> {
        let req = self.request(Method::GET, path).await.query(query);
        decode_body(&self.send(req).await?)
    }

    async fn post<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Failure> {
        let req = self.request(Method::POST, path).await.json(body);
        decode_body(&self.send(req).await?)
    }

    async fn put<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Failure> {
        let req = self.request(Method::PUT, path).await.json(body);
        decode_body(&self.send(req).await?)
    }

    async fn delete<T: DeserializeOwned + Send>(&self, path: &str) -> Result<T, Failure> {
        let req = self.request(Method::DELETE, path).await;
        decode_body(&self.send(req).await?)
    }

    async fn delete_empty(&self, path: &str) -> Result<(), Failure> {
        let req = self.request(Method::DELETE, path).await;
        self.send(req).await.map(|_| ())
    }
}
