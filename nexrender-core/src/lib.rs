//! Nexrender Core
//!
//! Core types shared by the Nexrender client, runner and CLI.
//!
//! This crate contains:
//! - Domain types: job references, status snapshots, poll settings, batch items
//! - DTOs: request payloads sent to the Nexrender Cloud API

pub mod domain;
pub mod dto;
