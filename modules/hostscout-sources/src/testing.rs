// Test mocks for the source pipeline.
//
// - MockFetcher (PageFetcher) — HashMap-based URL→body, with optional
//   per-fetch delay and failure injection; records the instant each fetch
//   began so tests can assert the rate-limit law.
// - Helpers for building a configured CIRCL source without touching the
//   process environment.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::Instant;

use hostscout_common::{Config, Credentials, SourceError};

use crate::circl::{Circl, SOURCE_NAME};
use crate::fetch::{FetchRequest, PageFetcher};

/// The URL the CIRCL source fetches for a given domain.
pub fn circl_url(domain: &str) -> String {
    format!("https://www.circl.lu/pdns/query/{domain}")
}

/// HashMap-based fetcher. Returns a Transport error for unregistered URLs.
#[derive(Default)]
pub struct MockFetcher {
    bodies: HashMap<String, String>,
    failures: HashSet<String>,
    delay: Option<Duration>,
    calls: Mutex<Vec<Instant>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_url(mut self, url: &str, body: &str) -> Self {
        self.bodies.insert(url.to_string(), body.to_string());
        self
    }

    /// Make this URL fail with a Transport error.
    pub fn failing(mut self, url: &str) -> Self {
        self.failures.insert(url.to_string());
        self
    }

    /// Delay every fetch, so cancellation tests can observe an in-flight call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Instants at which each fetch began, in call order.
    pub fn call_instants(&self) -> Vec<Instant> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl PageFetcher for MockFetcher {
    async fn fetch(&self, request: FetchRequest<'_>) -> Result<String, SourceError> {
        self.calls.lock().unwrap().push(Instant::now());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if self.failures.contains(request.url) {
            return Err(SourceError::Transport("connection refused".to_string()));
        }

        self.bodies
            .get(request.url)
            .cloned()
            .ok_or_else(|| SourceError::Transport(format!("no mock body for {}", request.url)))
    }
}

/// Test credentials accepted by `configured_circl`.
pub fn test_credentials() -> Credentials {
    Credentials {
        username: "user".to_string(),
        password: "pass".to_string(),
    }
}

/// Build a CIRCL source configured with complete test credentials.
pub fn configured_circl(fetcher: Arc<dyn PageFetcher>) -> Circl {
    let config = Config::with_credentials([(SOURCE_NAME.to_string(), test_credentials())]);
    let mut source = Circl::new(fetcher);
    source.configure(&config);
    source
}

/// Build a CIRCL source configured with no credentials (disabled mode).
pub fn disabled_circl(fetcher: Arc<dyn PageFetcher>) -> Circl {
    let config = Config::with_credentials([]);
    let mut source = Circl::new(fetcher);
    source.configure(&config);
    source
}
