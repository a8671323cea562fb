//! Tool sources.
//!
//! `ToolSource` abstracts where the catalog comes from; `HttpToolSource`
//! fetches it from the tools endpoint with a single GET.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::catalog::Tool;
use crate::error::{Result, ToolcatError};

/// Anything that can produce the full tool list.
#[async_trait]
pub trait ToolSource: Send + Sync {
    /// Fetch the complete tool list.
    async fn fetch_tools(&self) -> Result<Vec<Tool>>;
}

/// Fetches tools from an HTTP endpoint returning a JSON array.
#[derive(Debug, Clone)]
pub struct HttpToolSource {
    client: Client,
    endpoint: Url,
}

impl HttpToolSource {
    /// Create a source for `endpoint`.
    ///
    /// With `timeout` unset the request may wait indefinitely.
    pub fn new(endpoint: &str, timeout: Option<Duration>) -> Result<Self> {
        let endpoint = Url::parse(endpoint).map_err(|e| ToolcatError::Url(format!("{}: {}", endpoint, e)))?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// The underlying HTTP client, shared with the icon probe.
    pub fn client(&self) -> &Client {
        &self.client
    }
}

#[async_trait]
impl ToolSource for HttpToolSource {
    async fn fetch_tools(&self) -> Result<Vec<Tool>> {
        log::info!("Fetching tools from {}", self.endpoint);

        let response = self.client.get(self.endpoint.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            log::warn!("Tools endpoint returned {}", status);
            return Err(ToolcatError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let tools: Vec<Tool> = serde_json::from_slice(&body)?;

        log::info!("Fetched {} tools", tools.len());
        Ok(tools)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_valid_endpoint() {
        let source = HttpToolSource::new("http://localhost:3000/api/ai-tools", None).unwrap();
        assert_eq!(source.endpoint().path(), "/api/ai-tools");
    }

    #[test]
    fn test_new_with_timeout() {
        let source = HttpToolSource::new("https://example.com/tools", Some(Duration::from_secs(5)));
        assert!(source.is_ok());
    }

    #[test]
    fn test_new_rejects_invalid_endpoint() {
        let err = HttpToolSource::new("/api/ai-tools", None).unwrap_err();
        assert!(matches!(err, ToolcatError::Url(_)));
        assert!(err.to_string().contains("/api/ai-tools"));
    }
}
