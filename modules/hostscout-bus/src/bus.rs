use async_trait::async_trait;
use tokio::sync::broadcast;
use tracing::debug;

use crate::types::BusMessage;

/// Publish capability handed to data sources.
///
/// Delivery guarantees belong to the transport behind the implementation,
/// not to this trait: publishing transfers ownership of the message and
/// never fails from the source's point of view.
#[async_trait]
pub trait EventBus: Send + Sync {
    async fn publish(&self, message: BusMessage);
}

/// Fan-out bus over a tokio broadcast channel.
///
/// Messages published while no subscriber is attached are dropped, as are
/// messages to subscribers that have lagged past the channel capacity.
pub struct BroadcastBus {
    tx: broadcast::Sender<BusMessage>,
}

impl BroadcastBus {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Attach a new subscriber. Each subscriber sees every message
    /// published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<BusMessage> {
        self.tx.subscribe()
    }
}

#[async_trait]
impl EventBus for BroadcastBus {
    async fn publish(&self, message: BusMessage) {
        let topic = message.topic();
        if let Err(e) = self.tx.send(message) {
            // No receivers attached; nothing to deliver to.
            debug!(topic, error = %e, "Dropped bus message");
        }
    }
}
