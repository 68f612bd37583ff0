use std::sync::Arc;

use futures::stream::{self, StreamExt};
use tracing::info;

use hostscout_common::DiscoveryRequest;

use crate::source::{DataSource, InvocationContext};

/// Upper bound on sources queried at once for a single request.
const MAX_CONCURRENT_SOURCES: usize = 8;

/// Holds the configured data sources and fans requests out to them.
///
/// Sources that are disabled or cannot enumerate the domain no-op on their
/// own; the registry does not track per-source outcomes — all results flow
/// through the bus.
#[derive(Default)]
pub struct SourceRegistry {
    sources: Vec<Arc<dyn DataSource>>,
}

impl SourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, source: Arc<dyn DataSource>) {
        info!(source = %source.info(), kind = %source.info().kind, "Registered source");
        self.sources.push(source);
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Dispatch one request to every registered source concurrently.
    pub async fn dispatch(&self, ctx: &InvocationContext, request: &DiscoveryRequest) {
        stream::iter(self.sources.iter().cloned())
            .for_each_concurrent(MAX_CONCURRENT_SOURCES, |source| async move {
                source.handle_request(ctx, request).await;
            })
            .await;
    }
}
