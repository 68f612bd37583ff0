use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::{self, Instant};

/// Minimum-interval gate shared by all invocations of one source.
///
/// One cadence per source instance, not per request: concurrent acquirers
/// reserve strictly spaced slots under the lock and then sleep outside it,
/// so no two callers are ever released less than `interval` apart. There is
/// no error condition; the worst case is added latency.
pub struct RateLimiter {
    interval: Duration,
    next_slot: Mutex<Option<Instant>>,
}

impl RateLimiter {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_slot: Mutex::new(None),
        }
    }

    /// Wait until this caller's reserved slot arrives.
    ///
    /// The first acquire returns immediately; each subsequent acquire is
    /// released at least `interval` after the previous one's slot.
    pub async fn acquire(&self) {
        let slot = {
            let mut next = self.next_slot.lock().await;
            let now = Instant::now();
            let slot = match *next {
                Some(reserved) if reserved > now => reserved,
                _ => now,
            };
            *next = Some(slot + self.interval);
            slot
        };
        time::sleep_until(slot).await;
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}
