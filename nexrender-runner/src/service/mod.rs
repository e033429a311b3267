//! Service layer
//!
//! Services turn item parameters into requests: `action` resolves what an
//! item asks for, `handler` executes it against the Nexrender client, and
//! `params` gives typed access to the raw parameters.

pub mod action;
mod handler;
pub mod params;

pub use action::Action;
pub use handler::{NexrenderItemHandler, WaitForJobHandler};
