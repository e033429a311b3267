//! Test doubles shared by the scheduler and service tests

use async_trait::async_trait;
use nexrender_client::ClientError;
use nexrender_core::domain::job::{JobReference, JobStatusSnapshot};
use serde_json::{Value, json};
use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use crate::scheduler::{Clock, JobStatusSource};

/// Clock whose time only moves when a caller sleeps or the test advances it
pub struct ManualClock {
    start: Instant,
    elapsed: Mutex<Duration>,
    sleeps: AtomicUsize,
}

impl ManualClock {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            start: Instant::now(),
            elapsed: Mutex::new(Duration::ZERO),
            sleeps: AtomicUsize::new(0),
        })
    }

    pub fn advance(&self, duration: Duration) {
        *self.elapsed.lock().unwrap() += duration;
    }

    pub fn elapsed(&self) -> Duration {
        *self.elapsed.lock().unwrap()
    }

    pub fn sleeps(&self) -> usize {
        self.sleeps.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.start + self.elapsed()
    }

    async fn sleep(&self, duration: Duration) {
        self.sleeps.fetch_add(1, Ordering::SeqCst);
        self.advance(duration);
    }
}

/// Status source replaying a fixed script of responses
///
/// Each fetch optionally advances the clock to simulate request latency.
/// An exhausted script answers with a parse error so a runaway loop fails.
pub struct ScriptedSource {
    script: Mutex<VecDeque<Result<Value, ClientError>>>,
    fetches: AtomicUsize,
    clock: Option<(Arc<ManualClock>, Duration)>,
}

impl ScriptedSource {
    pub fn new(script: Vec<Result<Value, ClientError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            fetches: AtomicUsize::new(0),
            clock: None,
        }
    }

    /// Script of plain status values
    pub fn statuses(statuses: &[&str]) -> Self {
        Self::new(
            statuses
                .iter()
                .map(|status| Ok(json!({ "status": status })))
                .collect(),
        )
    }

    pub fn with_latency(mut self, clock: Arc<ManualClock>, latency: Duration) -> Self {
        self.clock = Some((clock, latency));
        self
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl JobStatusSource for ScriptedSource {
    async fn fetch_status(&self, _job: &JobReference) -> Result<JobStatusSnapshot, ClientError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if let Some((clock, latency)) = &self.clock {
            clock.advance(*latency);
        }
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::ParseError("script exhausted".to_string())))
            .map(JobStatusSnapshot::new)
    }
}
