//! # Content Transport
//!
//! Seam between the [`ContentStore`](crate::ContentStore) and wherever the
//! content actually lives. The dev server exposes it over HTTP at
//! [`CONTENT_ENDPOINT`]; the workspace crate also provides a local,
//! file-backed implementation.

use async_trait::async_trait;
use dwd_content::Document;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Route of the content resource on the dev server
pub const CONTENT_ENDPOINT: &str = "/__editor/content";

/// Body of a successful save
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveReceipt {
    pub ok: bool,
    /// ISO-8601 time of the write
    pub saved_at: String,
}

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Network(String),

    #[error("server responded with status {0}")]
    Status(u16),

    #[error("invalid response body: {0}")]
    Decode(String),

    #[error("{0}")]
    Backend(String),
}

#[async_trait]
pub trait ContentTransport: Send + Sync {
    /// Read the current document
    async fn fetch(&self) -> Result<Document, TransportError>;

    /// Persist `document`, replacing what was there
    async fn store(&self, document: &Document) -> Result<SaveReceipt, TransportError>;
}

#[async_trait]
impl<T: ContentTransport + ?Sized> ContentTransport for Box<T> {
    async fn fetch(&self) -> Result<Document, TransportError> {
        (**self).fetch().await
    }

    async fn store(&self, document: &Document) -> Result<SaveReceipt, TransportError> {
        (**self).store(document).await
    }
}

/// Talks to the content resource over HTTP
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    /// `base_url` is the server origin, e.g. `http://127.0.0.1:5173`
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), CONTENT_ENDPOINT),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ContentTransport for HttpTransport {
    async fn fetch(&self) -> Result<Document, TransportError> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(TransportError::Status(response.status().as_u16()));
        }

        response
            .json::<Document>()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))
    }

    async fn store(&self, document: &Document) -> Result<SaveReceipt, TransportError> {
        let response = self
            .client
            .put(&self.endpoint)
            .json(document)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(TransportError::Status(response.status().as_u16()));
        }

        response
            .json::<SaveReceipt>()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))
    }
}
