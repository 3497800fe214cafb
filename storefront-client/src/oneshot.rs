//! Oneshot HTTP client - in-memory calls into an axum Router
//!
//! Requires the "in-process" feature.

use crate::http::{HttpClient, decode_body, status_failure};
use crate::token::TokenStore;
use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, header};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::Failure;
use std::sync::Arc;
use tower::ServiceExt;

/// In-process HTTP client
///
/// Dispatches requests straight into a Router with tower's `oneshot`, for
/// embedding the backend in the same process or for tests. Paths are
/// resolved against `/`.
///
/// # Example
///
/// ```ignore
/// let client = OneshotHttpClient::new(build_app(), tokens);
/// let cart: Cart = client.get("cart").await?;
/// ```
#[derive(Clone)]
pub struct OneshotHttpClient {
    router: Router,
    tokens: Arc<dyn TokenStore>,
}

impl OneshotHttpClient {
    pub fn new(router: Router, tokens: Arc<dyn TokenStore>) -> Self {
        Self { router, tokens }
    }

    async fn build_request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Request<Body>, Failure> {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(token) = self.tokens.get().await {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let body = match body {
            Some(bytes) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(bytes)
            }
            None => Body::empty(),
        };

        builder
            .body(body)
            .map_err(|e| Failure::unexpected(format!("Failed to build request: {}", e)))
    }

    async fn execute(&self, request: Request<Body>) -> Result<Vec<u8>, Failure> {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .map_err(|e| Failure::unexpected(format!("Oneshot call failed: {}", e)))?;

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| Failure::connectivity(format!("Failed to read body: {}", e)))?;

        if !status.is_success() {
            return Err(status_failure(status.as_u16(), &body));
        }
        Ok(body.to_vec())
    }
}

fn uri(path: &str) -> String {
    format!("/{}", path.trim_start_matches('/'))
}

fn encode_json<B: Serialize>(body: &B) -> Result<Vec<u8>, Failure> {
    serde_json::to_vec(body)
        .map_err(|e| Failure::unexpected(format!("Failed to encode request body: {}", e)))
}

/// Flat query string from a serializable struct; `None` fields are dropped
fn query_string<Q: Serialize>(query: &Q) -> Result<String, Failure> {
    let value = serde_json::to_value(query)
        .map_err(|e| Failure::unexpected(format!("Failed to encode query: {}", e)))?;
    let serde_json::Value::Object(fields) = value else {
        return Err(Failure::unexpected("Query must serialize to an object"));
    };

    let mut url = reqwest::Url::parse("http://localhost/")
        .map_err(|e| Failure::unexpected(e.to_string()))?;
    {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in fields {
            match value {
                serde_json::Value::Null => {}
                serde_json::Value::String(s) => {
                    pairs.append_pair(&key, &s);
                }
                other => {
                    pairs.append_pair(&key, &other.to_string());
                }
            }
        }
    }
    Ok(url.query().unwrap_or_default().to_string())
}

#[async_trait]
impl HttpClient for OneshotHttpClient {
    async fn get<T: DeserializeOwned + Send>(&self, path: &str) -> Result<T, Failure> {
        let request = self.build_request(Method::GET, &uri(path), None).await?;
        decode_body(&self.execute(request).await?)
    }

    async fn get_with_query<T: DeserializeOwned + Send, Q: Serialize + Sync>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T, Failure> {
        let query = query_string(query)?;
        let target = if query.is_empty() {
            uri(path)
        } else {
            format!("{}?{}", uri(path), query)
        };
        let request = self.build_request(Method::GET, &target, None).await?;
        decode_body(&self.execute(request).await?)
    }

    async fn post<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Failure> {
        let body = encode_json(body)?;
        let request = self.build_request(Method::POST, &uri(path), Some(body)).await?;
        decode_body(&self.execute(request).await?)
    }

    async fn put<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Failure> {
        let body = encode_json(body)?;
        let request = self.build_request(Method::PUT, &uri(path), Some(body)).await?;
        decode_body(&self.execute(request).await?)
    }

    async fn delete<T: DeserializeOwned + Send>(&self, path: &str) -> Result<T, Failure> {
        let request = self.build_request(Method::DELETE, &uri(path), None).await?;
        decode_body(&self.execute(request).await?)
    }

    async fn delete_empty(&self, path: &str) -> Result<(), Failure> {
        let request = self.build_request(Method::DELETE, &uri(path), None).await?;
        self.execute(request).await.map(|_| ())
    }
}
