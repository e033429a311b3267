//! Scheduler layer for the runner
//!
//! This layer drives execution over time: the poller waits for a single
//! render job to reach a terminal status, and the batch runner walks the
//! input items in order and applies the run's failure policy.

pub mod batch;
pub mod clock;
pub mod poller;

pub use batch::{BatchRunner, ItemHandler};
pub use clock::{Clock, TokioClock};
pub use poller::{JobStatusSource, Poller};
