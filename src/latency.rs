use std::time::Duration;
use tracing::debug;

pub const DEFAULT_DELAY_MS: u64 = 3000;

/// Holds a response back for a fixed duration to mimic a slow upstream.
///
/// The wait is a tokio timer, so the worker is free to serve other requests
/// while a delayed response is pending.
#[derive(Clone, Copy, Debug)]
pub struct LatencySimulator {
    duration: Duration,
}

impl LatencySimulator {
    pub fn new(duration: Duration) -> LatencySimulator {
        LatencySimulator { duration }
    }

    pub fn from_millis(delay_ms: u64) -> LatencySimulator {
        LatencySimulator::new(Duration::from_millis(delay_ms))
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Runs `action` exactly once, after the configured duration has elapsed.
    pub async fn delay<T>(&self, action: impl FnOnce() -> T) -> T {
        debug!("delaying response by {:?}", self.duration);
        tokio::time::sleep(self.duration).await;
        action()
    }
}

impl Default for LatencySimulator {
    fn default() -> LatencySimulator {
        LatencySimulator::from_millis(DEFAULT_DELAY_MS)
    }
}
