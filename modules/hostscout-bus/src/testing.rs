//! Test double for the bus: records every published message in order so
//! tests can assert on the exact publish sequence.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::bus::EventBus;
use crate::types::BusMessage;

#[derive(Default)]
pub struct CollectingBus {
    messages: Mutex<Vec<BusMessage>>,
}

impl CollectingBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything published so far, in publish order.
    pub fn messages(&self) -> Vec<BusMessage> {
        self.messages.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.messages.lock().unwrap().len()
    }
}

#[async_trait]
impl EventBus for CollectingBus {
    async fn publish(&self, message: BusMessage) {
        self.messages.lock().unwrap().push(message);
    }
}
