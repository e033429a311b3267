//! Job DTOs

use serde::{Deserialize, Serialize};

/// A single query key/value pair for `GET /jobs`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParameter {
    pub key: String,
    #[serde(default)]
    pub value: Option<String>,
}

impl QueryParameter {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
        }
    }

    /// Parses `key=value`; a bare `key` yields an empty value
    pub fn parse(pair: &str) -> Self {
        match pair.split_once('=') {
            Some((key, value)) => Self::new(key, value),
            None => Self {
                key: pair.to_string(),
                value: None,
            },
        }
    }
}

/// Turns query parameters into the pairs sent on the wire
///
/// Entries with an empty key are dropped and a missing value becomes "".
pub fn query_pairs(params: &[QueryParameter]) -> Vec<(String, String)> {
    params
        .iter()
        .filter(|p| !p.key.is_empty())
        .map(|p| (p.key.clone(), p.value.clone().unwrap_or_default()))
        .collect()
}
