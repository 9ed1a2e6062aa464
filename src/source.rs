use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

/// External counting service queried on every page load.
pub const VISITOR_COUNTER_URL: &str = "https://visitor-counter-7fsg6cnsoa-uc.a.run.app";

/// Everything that can go wrong between issuing the request and reading
/// `count`. The page only ever shows one message for all of them.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Request(reqwest::Error),
    #[error("failed to read response body: {0}")]
    Body(reqwest::Error),
    #[error("response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("response body is null")]
    NullBody,
}

#[async_trait(?Send)]
pub trait CountSource {
    /// Fetches the counter response and decodes it as JSON.
    async fn fetch_body(&self) -> Result<Value, LoadError>;
}

#[derive(Debug, Clone)]
pub struct HttpCountSource {
    client: Client,
    url: String,
}

impl HttpCountSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for HttpCountSource {
    fn default() -> Self {
        Self::new(VISITOR_COUNTER_URL)
    }
}

#[async_trait(?Send)]
impl CountSource for HttpCountSource {
    async fn fetch_body(&self) -> Result<Value, LoadError> {
        // Status is not inspected; any body that parses as JSON is accepted.
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(LoadError::Request)?;
        let body = response.bytes().await.map_err(LoadError::Body)?;
        Ok(serde_json::from_slice(&body)?)
    }
}
