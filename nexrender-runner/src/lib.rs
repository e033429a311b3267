//! Nexrender Runner
//!
//! Executes batches of Nexrender operations, one item at a time.
//!
//! Architecture:
//! - Configuration: credentials and run-level failure policy
//! - Scheduler: the job poller (wait until a job is terminal) and the
//!   batch runner (per-item execution, failure policy, result pairing)
//! - Services: resolving item parameters into actions and executing
//!   them against the Nexrender client
//!
//! Items are processed strictly in order. Each item yields exactly one
//! result, or the run aborts on the first failure when continue-on-fail
//! is off.

pub mod config;
pub mod error;
pub mod scheduler;
pub mod service;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{ClientConfig, RunConfig};
pub use error::{BatchError, ItemError, PollError};
pub use scheduler::{BatchRunner, Clock, ItemHandler, JobStatusSource, Poller, TokioClock};
pub use service::{Action, NexrenderItemHandler, WaitForJobHandler};
