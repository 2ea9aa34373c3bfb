//! Request pacing
//!
//! Enforces a minimum interval between consecutive upstream calls. This is
//! a caller-side policy owned by the aggregation pipeline, not part of the
//! HTTP client's contract: the client issues whatever it is asked to, the
//! pipeline awaits the pacer before asking.

use std::time::Duration;
use tokio::time::{sleep, Instant};

/// Minimum inter-call interval enforcer.
///
/// The pipeline is strictly sequential, so the pacer tracks a single
/// "last call" instant and sleeps for whatever remains of the interval.
/// The first call goes through without waiting.
#[derive(Debug)]
pub struct Pacer {
    min_interval: Duration,
    last_call: Option<Instant>,
}

impl Pacer {
    /// Create a pacer with the given minimum interval between calls.
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_call: None,
        }
    }

    /// Wait until the minimum interval since the previous call has elapsed,
    /// then mark this call.
    pub async fn pace(&mut self) {
        if let Some(last) = self.last_call {
            let elapsed = last.elapsed();
            if elapsed < self.min_interval {
                sleep(self.min_interval - elapsed).await;
            }
        }
        self.last_call = Some(Instant::now());
    }
}
