//! Thin JSON client over reqwest, bound to one backend base URL.
//!
//! No retries, no timeouts beyond reqwest's defaults, no authentication.

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use inkpost_core::error::StoreError;
use inkpost_shared::{DeleteAck, ErrorDetail};

/// HTTP client errors.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    #[error("Request failed: {0}")]
    Network(String),

    #[error("Resource not found")]
    NotFound,

    #[error("HTTP {status}: {detail}")]
    Status { status: u16, detail: String },

    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl From<HttpError> for StoreError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::Network(msg) => StoreError::Connection(msg),
            HttpError::NotFound => StoreError::NotFound,
            HttpError::Status { status, detail } => StoreError::Backend { status, detail },
            HttpError::Decode(msg) => StoreError::Serialization(msg),
        }
    }
}

/// JSON client for a fixed base URL.
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    client: Client,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, HttpError> {
        let url = self.url(path);
        tracing::debug!(method = "GET", url = %url, "Backend request");
        let response = self.send(self.client.get(&url)).await?;
        Self::decode(response).await
    }

    /// Like `get_json`, but a 404 is `Ok(None)`.
    pub async fn get_optional<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Option<T>, HttpError> {
        match self.get_json(path).await {
            Ok(value) => Ok(Some(value)),
            Err(HttpError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, HttpError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        tracing::debug!(method = "POST", url = %url, "Backend request");
        let response = self.send(self.client.post(&url).json(body)).await?;
        Self::decode(response).await
    }

    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, HttpError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        tracing::debug!(method = "PUT", url = %url, "Backend request");
        let response = self.send(self.client.put(&url).json(body)).await?;
        Self::decode(response).await
    }

    /// DELETE; an empty response body counts as an acknowledgement.
    pub async fn delete(&self, path: &str) -> Result<DeleteAck, HttpError> {
        let url = self.url(path);
        tracing::debug!(method = "DELETE", url = %url, "Backend request");
        let response = self.send(self.client.delete(&url)).await?;

        let body = response
            .text()
            .await
            .map_err(|e| HttpError::Decode(e.to_string()))?;
        if body.trim().is_empty() {
            return Ok(DeleteAck::default());
        }
        serde_json::from_str(&body).map_err(|e| HttpError::Decode(e.to_string()))
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, HttpError> {
        let response = request
            .send()
            .await
            .map_err(|e| HttpError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == StatusCode::NOT_FOUND {
            return Err(HttpError::NotFound);
        }

        let body = response.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<ErrorDetail>(&body)
            .map(|e| e.message())
            .unwrap_or(body);

        tracing::warn!(status = status.as_u16(), detail = %detail, "Backend rejected request");
        Err(HttpError::Status {
            status: status.as_u16(),
            detail,
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, HttpError> {
        response
            .json::<T>()
            .await
            .map_err(|e| HttpError::Decode(e.to_string()))
    }
}
