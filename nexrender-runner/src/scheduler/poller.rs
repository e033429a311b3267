//! Job poller
//!
//! Fetches a job's status at a fixed interval until the job is terminal
//! (`finished` or `error`) or the deadline passes.
//!
//! Each iteration fetches first, then checks for a terminal status, and only
//! then compares against the deadline. A job that turns terminal on the fetch
//! that crosses the deadline is therefore still reported as a success.

use async_trait::async_trait;
use nexrender_client::{ClientError, NexrenderClient};
use nexrender_core::domain::job::{JobReference, JobStatusSnapshot};
use nexrender_core::domain::poll::{PollConfig, PollSettings};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::error::PollError;
use crate::scheduler::clock::{Clock, TokioClock};

/// Capability to fetch the current status of a job
#[async_trait]
pub trait JobStatusSource: Send + Sync {
    /// Fetches the job once; failures are surfaced as-is
    async fn fetch_status(&self, job: &JobReference) -> Result<JobStatusSnapshot, ClientError>;
}

#[async_trait]
impl JobStatusSource for NexrenderClient {
    async fn fetch_status(&self, job: &JobReference) -> Result<JobStatusSnapshot, ClientError> {
        self.get_job(job.as_str()).await
    }
}

/// Waits for render jobs to reach a terminal status
#[derive(Clone)]
pub struct Poller {
    clock: Arc<dyn Clock>,
}

impl Poller {
    /// Creates a poller backed by the wall clock
    pub fn new() -> Self {
        Self::with_clock(Arc::new(TokioClock))
    }

    /// Creates a poller using a custom time source
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Resolves settings into a config whose deadline starts now
    pub fn config(&self, settings: PollSettings) -> PollConfig {
        settings.starting_at(self.clock.now())
    }

    /// Polls `job` until its status is `finished` or `error`
    ///
    /// # Returns
    /// The first terminal snapshot. An `error` status is returned as a
    /// snapshot, not as a failure; judging the outcome is up to the caller.
    ///
    /// # Errors
    /// - [`PollError::Transport`] as soon as a fetch fails (no retry)
    /// - [`PollError::Timeout`] when a non-terminal status is seen after the deadline
    pub async fn poll_until_terminal(
        &self,
        job: &JobReference,
        config: &PollConfig,
        source: &dyn JobStatusSource,
    ) -> Result<JobStatusSnapshot, PollError> {
        info!(
            "Waiting for job {} (interval: {:?}, timeout: {} minute(s))",
            job, config.interval, config.timeout_minutes
        );

        let mut fetches: u64 = 0;

        loop {
            let last = source.fetch_status(job).await?;
            fetches += 1;

            debug!(
                "Polled job {} status={} (fetch #{})",
                job,
                last.status().unwrap_or("unknown"),
                fetches
            );

            if last.is_terminal() {
                info!(
                    "Job {} reached status {} after {} fetch(es)",
                    job,
                    last.status().unwrap_or("unknown"),
                    fetches
                );
                return Ok(last);
            }

            if self.clock.now() > config.deadline {
                warn!(
                    "Timed out waiting for job {} after {} fetch(es)",
                    job, fetches
                );
                return Err(PollError::Timeout {
                    job_id: job.to_string(),
                    timeout_minutes: config.timeout_minutes,
                });
            }

            self.clock.sleep(config.interval).await;
        }
    }

    /// Convenience wrapper: fixes the deadline now, then polls
    pub async fn wait_for_job(
        &self,
        job: &JobReference,
        settings: PollSettings,
        source: &dyn JobStatusSource,
    ) -> Result<JobStatusSnapshot, PollError> {
        let config = self.config(settings);
        self.poll_until_terminal(job, &config, source).await
    }
}

impl std::fmt::Debug for Poller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Poller").finish_non_exhaustive()
    }
}

impl Default for Poller {
    fn default() -> Self {
        Self::new()
    }
}
