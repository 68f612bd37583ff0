pub mod bus;
#[cfg(any(test, feature = "test-support"))]
pub mod testing;
pub mod types;

pub use bus::{BroadcastBus, EventBus};
pub use types::{BusMessage, Priority};
