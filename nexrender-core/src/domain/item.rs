//! Batch item types
//!
//! An [`InputItem`] carries the per-item parameters (resource and operation
//! selectors, identifiers, payloads) plus named references to binary files.
//! Each item produces exactly one [`ItemResult`], tagged with its index.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use std::collections::HashMap;
use std::path::PathBuf;

/// One input item of a batch run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputItem {
    /// Named parameters, e.g. `resource`, `operation`, `jobId`, `body`
    #[serde(default)]
    pub parameters: Map<String, Value>,

    /// Binary attachments keyed by property name
    #[serde(default)]
    pub binary: HashMap<String, BinaryRef>,
}

impl InputItem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a parameter, replacing any previous value
    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }

    /// Attaches a binary file under `property`
    pub fn with_binary(mut self, property: impl Into<String>, binary: BinaryRef) -> Self {
        self.binary.insert(property.into(), binary);
        self
    }

    pub fn parameter(&self, name: &str) -> Option<&Value> {
        self.parameters.get(name)
    }
}

/// Reference to a local file attached to an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinaryRef {
    pub path: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

impl BinaryRef {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file_name: None,
            mime_type: None,
        }
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }
}

/// Outcome of processing a single item
#[derive(Debug, Clone, PartialEq)]
pub enum ItemResult {
    /// The response body (or status snapshot) produced by the item
    Ok { index: usize, json: Value },
    /// A failure recorded because the run continues past failed items
    Failed { index: usize, failure: ItemFailure },
}

/// Details of a recorded item failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFailure {
    /// Concise, human readable message
    pub message: String,
    /// Job the failure relates to, when the item was waiting on one
    pub job_id: Option<String>,
}

impl ItemResult {
    pub fn ok(index: usize, json: Value) -> Self {
        Self::Ok { index, json }
    }

    pub fn failed(index: usize, message: impl Into<String>) -> Self {
        Self::Failed {
            index,
            failure: ItemFailure {
                message: message.into(),
                job_id: None,
            },
        }
    }

    /// Index of the input item this result is paired with
    pub fn index(&self) -> usize {
        match self {
            Self::Ok { index, .. } | Self::Failed { index, .. } => *index,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok { .. })
    }

    /// Builds the record handed back to the caller
    ///
    /// Failures become `{ "error": <message> }`, with `jobId` added when known.
    pub fn into_record(self) -> OutputRecord {
        match self {
            Self::Ok { index, json } => OutputRecord {
                json,
                paired_item: index,
            },
            Self::Failed { index, failure } => {
                let json = match failure.job_id {
                    Some(job_id) => json!({ "jobId": job_id, "error": failure.message }),
                    None => json!({ "error": failure.message }),
                };
                OutputRecord {
                    json,
                    paired_item: index,
                }
            }
        }
    }
}

/// Output record paired to its originating item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputRecord {
    pub json: Value,
    pub paired_item: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_deserializes_with_defaults() {
        let item: InputItem = serde_json::from_value(json!({
            "parameters": { "resource": "job", "operation": "get", "jobId": "01ABC" }
        }))
        .unwrap();

        assert_eq!(item.parameter("jobId"), Some(&json!("01ABC")));
        assert!(item.binary.is_empty());
    }

    #[test]
    fn test_binary_ref_camel_case() {
        let item: InputItem = serde_json::from_value(json!({
            "binary": { "data": { "path": "/tmp/a.ttf", "fileName": "a.ttf", "mimeType": "font/ttf" } }
        }))
        .unwrap();

        let binary = &item.binary["data"];
        assert_eq!(binary.file_name.as_deref(), Some("a.ttf"));
        assert_eq!(binary.mime_type.as_deref(), Some("font/ttf"));
    }

    #[test]
    fn test_failed_record_shape() {
        let record = ItemResult::failed(2, "HTTP 404: job not found").into_record();
        assert_eq!(record.paired_item, 2);
        assert_eq!(record.json, json!({ "error": "HTTP 404: job not found" }));
    }

    #[test]
    fn test_failed_record_with_job_id() {
        let result = ItemResult::Failed {
            index: 0,
            failure: ItemFailure {
                message: "boom".to_string(),
                job_id: Some("01XYZ".to_string()),
            },
        };
        assert_eq!(
            result.into_record().json,
            json!({ "jobId": "01XYZ", "error": "boom" })
        );
    }

    #[test]
    fn test_ok_record_is_raw_body() {
        let result = ItemResult::ok(1, json!({ "status": "finished" }));
        assert!(result.is_ok());
        assert_eq!(result.index(), 1);
        let record = result.into_record();
        assert_eq!(record.json, json!({ "status": "finished" }));
        assert_eq!(
            serde_json::to_value(&record).unwrap()["pairedItem"],
            json!(1)
        );
    }
}
