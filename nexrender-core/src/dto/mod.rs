//! Data Transfer Objects for the Nexrender Cloud API
//!
//! Request payloads whose shape is fixed by the API. Job and template
//! bodies are free-form JSON and are passed through as `serde_json::Value`.

pub mod font;
pub mod job;
pub mod secret;
