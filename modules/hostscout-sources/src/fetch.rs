// PageFetcher — all provider HTTP traffic behind one trait.
//
// Sources never touch reqwest directly; tests swap in MockFetcher and run
// with no network. Retry/backoff policy belongs to whatever sits behind
// the implementation, not here.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use hostscout_common::{Credentials, SourceError};

/// One provider request: URL, extra headers, optional basic auth.
pub struct FetchRequest<'a> {
    pub url: &'a str,
    pub headers: &'a [(&'a str, &'a str)],
    pub auth: Option<&'a Credentials>,
}

#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Perform one GET and return the response body.
    ///
    /// Network failures, timeouts, and non-2xx statuses all surface as
    /// `SourceError::Transport`. No retries at this layer.
    async fn fetch(&self, request: FetchRequest<'_>) -> Result<String, SourceError>;
}

/// Reqwest-backed fetcher shared by all sources in a process.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
        }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, request: FetchRequest<'_>) -> Result<String, SourceError> {
        let parsed = url::Url::parse(request.url)
            .map_err(|e| SourceError::Transport(format!("invalid URL {}: {e}", request.url)))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(SourceError::Transport(format!(
                "only http/https URLs are allowed, got: {}",
                parsed.scheme()
            )));
        }

        debug!(url = request.url, "Fetching provider page");

        let mut builder = self.client.get(request.url);
        for (key, value) in request.headers {
            builder = builder.header(*key, *value);
        }
        if let Some(credentials) = request.auth {
            builder = builder.basic_auth(&credentials.username, Some(&credentials.password));
        }

        let response = builder
            .send()
            .await
            .map_err(|e| SourceError::Transport(e.to_string()))?
            .error_for_status()
            .map_err(|e| SourceError::Transport(e.to_string()))?;

        response
            .text()
            .await
            .map_err(|e| SourceError::Transport(e.to_string()))
    }
}
