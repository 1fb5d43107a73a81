//! HTTP seam for the recipe client.
//!
//! `RecipeClient` only needs "GET this endpoint with these query pairs and
//! give me the body". Keeping that behind a trait lets tests substitute
//! canned responses without a network.

use crate::error::{Error, Result};

/// Fetch a response body from the remote API.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// GET `endpoint` (relative to the API base) with `query` pairs.
    ///
    /// Implementations return `Error::Network` for transport failures and
    /// `Error::HttpStatus` for non-2xx responses.
    async fn get(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<String>;
}

/// `reqwest`-backed transport.
///
/// No timeout is configured and requests are never retried.
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Build a transport rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `Error::HttpClientBuild` if the TLS backend fails to initialize.
    pub fn new(base_url: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("recipebox/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_owned() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn get(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<String> {
        let url = format!("{}/{}", self.base_url, endpoint);
        tracing::debug!(%url, ?query, "recipe api request");

        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;
        if !status.is_success() {
            return Err(Error::HttpStatus { status: status.as_u16(), body: text });
        }
        Ok(text)
    }
}
