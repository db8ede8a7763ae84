//! HTTP client abstraction for the weather and nutrition providers.
//!
//! Providers talk to the network only through [`HttpClient`], so tests can
//! swap in a mock and exercise the fallback paths without real requests.
//! The default implementation wraps reqwest.
//!
//! # Example Usage:
//! ```ignore
//! use hydrobot_core::http::{DefaultHttpClient, HttpClient};
//!
//! let client: Arc<dyn HttpClient> = Arc::new(DefaultHttpClient::new());
//! let resp = client.get(url, vec![("q".into(), "Berlin".into())]).await?;
//! if resp.is_success() { /* parse resp.body */ }
//! ```

use async_trait::async_trait;
use reqwest;
use crate::Error;

/// Status and raw body of a completed request. Non-2xx statuses are not
/// errors at this layer; providers decide what to do with them.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A generic trait for making HTTP requests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, url: String, query: Vec<(String, String)>) -> Result<HttpResponse, Error>;
}

#[derive(Clone, Default)]
pub struct DefaultHttpClient {
    client: reqwest::Client,
}

impl DefaultHttpClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl HttpClient for DefaultHttpClient {
    async fn get(&self, url: String, query: Vec<(String, String)>) -> Result<HttpResponse, Error> {
        let response = self.client
            .get(&url)
            .query(&query)
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(HttpResponse { status, body })
    }
}
