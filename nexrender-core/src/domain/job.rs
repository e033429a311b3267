//! Job domain types

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Status value reported once a render completed successfully
pub const STATUS_FINISHED: &str = "finished";

/// Status value reported once a render failed
pub const STATUS_ERROR: &str = "error";

/// Identifier of a remote render job
///
/// Always supplied by the caller (Nexrender issues ULIDs); never generated locally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobReference(String);

impl JobReference {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for JobReference {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for JobReference {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Raw body returned by `GET /jobs/{id}`
///
/// Only the `status` field is interpreted. Every other field is carried
/// through untouched so callers receive exactly what the API sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobStatusSnapshot(Value);

impl JobStatusSnapshot {
    pub fn new(body: Value) -> Self {
        Self(body)
    }

    /// The `status` field, if the body is an object carrying a string status
    pub fn status(&self) -> Option<&str> {
        self.0.get("status").and_then(Value::as_str)
    }

    /// Whether the job reached a state after which it will not change again
    ///
    /// Both `finished` and `error` count as terminal. Any other value,
    /// including a missing status, means the job is still in flight.
    pub fn is_terminal(&self) -> bool {
        matches!(self.status(), Some(STATUS_FINISHED) | Some(STATUS_ERROR))
    }

    pub fn body(&self) -> &Value {
        &self.0
    }

    pub fn into_body(self) -> Value {
        self.0
    }
}

impl From<Value> for JobStatusSnapshot {
    fn from(body: Value) -> Self {
        Self(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_finished_and_error_are_terminal() {
        assert!(JobStatusSnapshot::new(json!({ "status": "finished" })).is_terminal());
        assert!(JobStatusSnapshot::new(json!({ "status": "error" })).is_terminal());
    }

    #[test]
    fn test_other_statuses_are_not_terminal() {
        for status in ["queued", "processing", "render:dorender", "FINISHED"] {
            let snapshot = JobStatusSnapshot::new(json!({ "status": status }));
            assert!(!snapshot.is_terminal(), "{status} should not be terminal");
        }
    }

    #[test]
    fn test_missing_or_non_string_status() {
        assert_eq!(JobStatusSnapshot::new(json!({})).status(), None);
        assert_eq!(JobStatusSnapshot::new(json!({ "status": 3 })).status(), None);
        assert!(!JobStatusSnapshot::new(json!("finished")).is_terminal());
    }

    #[test]
    fn test_snapshot_keeps_body_untouched() {
        let body = json!({ "status": "finished", "outputUrl": "https://x/out.mp4" });
        let snapshot = JobStatusSnapshot::new(body.clone());
        assert_eq!(snapshot.into_body(), body);
    }

    #[test]
    fn test_job_reference_display() {
        let job = JobReference::from("01ABC");
        assert_eq!(job.to_string(), "01ABC");
        assert_eq!(serde_json::to_value(&job).unwrap(), json!("01ABC"));
    }
}
