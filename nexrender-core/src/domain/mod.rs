//! Core domain types
//!
//! These types describe a render job as seen from the outside (an opaque
//! identifier plus whatever the API returns for it), the parameters of a
//! single wait-until-done operation, and the items flowing through a batch.

pub mod item;
pub mod job;
pub mod poll;
