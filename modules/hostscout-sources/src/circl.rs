//! CIRCL passive-DNS source.
//!
//! Queries `https://www.circl.lu/pdns/query/<domain>` with basic auth and
//! republishes every unique in-domain hostname from the NDJSON response.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use hostscout_bus::BusMessage;
use hostscout_common::{
    domain_pattern, Config, Credentials, DiscoveryEvent, DiscoveryRequest, SourceError,
    SourceInfo, SourceKind,
};

use crate::extract::extract_names;
use crate::fetch::{FetchRequest, PageFetcher};
use crate::limits::RateLimiter;
use crate::source::{DataSource, InvocationContext};

pub const SOURCE_NAME: &str = "CIRCL";

const PDNS_ENDPOINT: &str = "https://www.circl.lu/pdns/query";

/// The CIRCL data source.
///
/// Built uninitialized, then configured exactly once before being shared;
/// `configure` takes `&mut self` so the borrow checker enforces the
/// ordering. A source configured without complete credentials stays in a
/// disabled mode where every invocation is a silent no-op.
pub struct Circl {
    info: SourceInfo,
    credentials: Option<Credentials>,
    limiter: RateLimiter,
    fetcher: Arc<dyn PageFetcher>,
}

impl Circl {
    /// Returns the source initialized but not yet configured.
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self {
            info: SourceInfo::new(SOURCE_NAME, SourceKind::Api),
            credentials: None,
            limiter: RateLimiter::new(Duration::from_secs(
                hostscout_common::config::DEFAULT_RATE_LIMIT_SECS,
            )),
            fetcher,
        }
    }

    /// One-time configure: load credentials and the rate-limit interval.
    ///
    /// Missing or incomplete credentials are warned about here, once, and
    /// never again per invocation.
    pub fn configure(&mut self, config: &Config) {
        self.limiter = RateLimiter::new(Duration::from_secs(config.rate_limit_secs));
        match config.credentials(SOURCE_NAME) {
            Some(credentials) if credentials.is_complete() => {
                self.credentials = Some(credentials.clone());
            }
            _ => {
                warn!(
                    source = SOURCE_NAME,
                    "{}",
                    SourceError::ConfigMissing(SOURCE_NAME.to_string())
                );
                self.credentials = None;
            }
        }
    }

    /// Whether this source will act on requests.
    pub fn enabled(&self) -> bool {
        self.credentials.is_some()
    }

    fn query_url(&self, domain: &str) -> String {
        format!("{PDNS_ENDPOINT}/{domain}")
    }
}

#[async_trait]
impl DataSource for Circl {
    fn info(&self) -> &SourceInfo {
        &self.info
    }

    async fn handle_request(&self, ctx: &InvocationContext, request: &DiscoveryRequest) {
        let Some(credentials) = &self.credentials else {
            return;
        };
        let Some(pattern) = domain_pattern(&request.domain) else {
            debug!(
                source = %self.info,
                "{}",
                SourceError::PatternUnavailable(request.domain.clone())
            );
            return;
        };

        ctx.bus
            .publish(BusMessage::SourceActive {
                source: self.info.name.clone(),
            })
            .await;
        ctx.bus
            .publish(BusMessage::Log {
                message: format!(
                    "Querying {} for {} subdomains",
                    self.info, request.domain
                ),
            })
            .await;

        self.limiter.acquire().await;

        let url = self.query_url(&request.domain);
        let headers = [("Content-Type", "application/json")];
        let fetch = self.fetcher.fetch(FetchRequest {
            url: &url,
            headers: &headers,
            auth: Some(credentials),
        });

        let body = tokio::select! {
            _ = ctx.cancel.cancelled() => {
                debug!(
                    source = %self.info,
                    run_id = %request.run_id,
                    "Invocation canceled mid-fetch"
                );
                return;
            }
            result = fetch => match result {
                Ok(body) => body,
                Err(e) => {
                    ctx.bus
                        .publish(BusMessage::Log {
                            message: format!("{}: {url}: {e}", self.info),
                        })
                        .await;
                    return;
                }
            },
        };

        if ctx.cancel.is_cancelled() {
            return;
        }

        // Second liveness heartbeat, right after the provider call returns.
        ctx.bus
            .publish(BusMessage::SourceActive {
                source: self.info.name.clone(),
            })
            .await;

        let names = extract_names(&body, &pattern);
        debug!(
            source = %self.info,
            domain = %request.domain,
            run_id = %request.run_id,
            unique_names = names.len(),
            "Extraction complete"
        );

        for name in names {
            if ctx.cancel.is_cancelled() {
                return;
            }
            ctx.bus
                .publish(BusMessage::NameDiscovered {
                    event: DiscoveryEvent {
                        name,
                        domain: request.domain.clone(),
                        source_kind: self.info.kind,
                        source: self.info.name.clone(),
                    },
                })
                .await;
        }
    }
}
