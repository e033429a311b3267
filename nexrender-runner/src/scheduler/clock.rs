//! Time source used by the poller
//!
//! Reading the time and waiting go through [`Clock`] so tests can move
//! time forward instead of sleeping.

use async_trait::async_trait;
use std::time::{Duration, Instant};

/// Source of the current time and of cooperative waits
#[async_trait]
pub trait Clock: Send + Sync {
    /// Current instant
    fn now(&self) -> Instant;

    /// Suspends the caller for `duration`
    async fn sleep(&self, duration: Duration);
}

/// Wall-clock time with tokio timers
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

#[async_trait]
impl Clock for TokioClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
