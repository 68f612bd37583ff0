use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use hostscout_bus::EventBus;
use hostscout_common::{DiscoveryRequest, SourceInfo};

/// Shared handles for one invocation: where results go and when to stop.
///
/// The orchestrator builds one context per enumeration run and hands it to
/// every dispatched request; cancelling the token aborts in-flight fetches
/// and suppresses any further publishing.
pub struct InvocationContext {
    pub bus: Arc<dyn EventBus>,
    pub cancel: CancellationToken,
}

impl InvocationContext {
    pub fn new(bus: Arc<dyn EventBus>) -> Self {
        Self {
            bus,
            cancel: CancellationToken::new(),
        }
    }

    pub fn with_cancel(bus: Arc<dyn EventBus>, cancel: CancellationToken) -> Self {
        Self { bus, cancel }
    }
}

/// One data source in the discovery pipeline.
///
/// Implementations are configured once, then stay active for process
/// lifetime and must tolerate concurrent invocations against the same
/// instance. All results are delivered through the context's bus; there is
/// no return value and no fatal error path.
#[async_trait]
pub trait DataSource: Send + Sync {
    fn info(&self) -> &SourceInfo;

    /// Process one domain enumeration need end to end.
    async fn handle_request(&self, ctx: &InvocationContext, request: &DiscoveryRequest);
}
