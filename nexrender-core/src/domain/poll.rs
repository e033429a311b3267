//! Poll settings for waiting on a render job

use std::time::{Duration, Instant};

/// Default time between two status checks, in seconds
pub const DEFAULT_POLL_INTERVAL_SECONDS: u64 = 5;

/// Default time to wait for a terminal status, in minutes
pub const DEFAULT_TIMEOUT_MINUTES: u64 = 30;

/// Deadline offset used when the configured timeout does not fit an `Instant`
const FAR_FUTURE: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

/// Caller-facing poll parameters
///
/// Values below one are clamped up to one; they are never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollSettings {
    pub interval_seconds: u64,
    pub timeout_minutes: u64,
}

impl PollSettings {
    pub fn new(interval_seconds: i64, timeout_minutes: i64) -> Self {
        Self {
            interval_seconds: interval_seconds.max(1) as u64,
            timeout_minutes: timeout_minutes.max(1) as u64,
        }
    }

    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_seconds)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_minutes.saturating_mul(60))
    }

    /// Fixes the deadline for one poll operation starting at `started_at`
    ///
    /// Timeouts too large to represent push the deadline a century out.
    pub fn starting_at(&self, started_at: Instant) -> PollConfig {
        let deadline = started_at
            .checked_add(self.timeout())
            .or_else(|| started_at.checked_add(FAR_FUTURE))
            .unwrap_or(started_at);

        PollConfig {
            interval: self.interval(),
            timeout_minutes: self.timeout_minutes,
            deadline,
        }
    }
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            interval_seconds: DEFAULT_POLL_INTERVAL_SECONDS,
            timeout_minutes: DEFAULT_TIMEOUT_MINUTES,
        }
    }
}

/// Resolved configuration of a single poll operation
///
/// The deadline is computed once when the operation starts and never moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollConfig {
    /// Fixed wait between two fetches
    pub interval: Duration,
    /// Configured timeout, kept for diagnostics
    pub timeout_minutes: u64,
    /// Absolute point after which a non-terminal status fails the poll
    pub deadline: Instant,
}
