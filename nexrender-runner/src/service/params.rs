//! Typed access to item parameters
//!
//! Parameters arrive as loosely typed JSON. Missing optional values fall
//! back to defaults; missing or malformed required values become
//! [`ItemError::Validation`] before any request is made.

use nexrender_core::domain::item::InputItem;
use nexrender_core::dto::job::QueryParameter;
use serde_json::Value;

use crate::error::ItemError;

/// String parameter, or `default` when absent or null
pub fn string_or(item: &InputItem, name: &str, default: &str) -> String {
    match item.parameter(name) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => default.to_string(),
        Some(other) => other.to_string(),
    }
}

/// Non-empty string parameter
pub fn required_string(item: &InputItem, name: &str) -> Result<String, ItemError> {
    let value = string_or(item, name, "");
    if value.trim().is_empty() {
        return Err(ItemError::validation(format!(
            "Missing required parameter '{}'",
            name
        )));
    }
    Ok(value)
}

/// Boolean parameter; accepts `true`/`false` literals and strings
pub fn bool_or(item: &InputItem, name: &str, default: bool) -> Result<bool, ItemError> {
    match item.parameter(name) {
        None | Some(Value::Null) => Ok(default),
        Some(Value::Bool(b)) => Ok(*b),
        Some(Value::String(s)) if s.eq_ignore_ascii_case("true") => Ok(true),
        Some(Value::String(s)) if s.eq_ignore_ascii_case("false") => Ok(false),
        Some(other) => Err(ItemError::validation(format!(
            "Parameter '{}' must be a boolean, got {}",
            name, other
        ))),
    }
}

/// Integer parameter used for poll settings
///
/// Fractions round up. Unparsable values yield 0 so that the poll settings
/// clamp them to their minimum instead of failing the item.
pub fn integer_or(item: &InputItem, name: &str, default: i64) -> i64 {
    match item.parameter(name) {
        None | Some(Value::Null) => default,
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.ceil() as i64))
            .unwrap_or(0),
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .map(|f| f.ceil() as i64)
            .unwrap_or(0),
        Some(_) => 0,
    }
}

/// JSON body parameter
///
/// Strings are parsed as JSON; objects and arrays are used as-is.
pub fn json_body(item: &InputItem, name: &str) -> Result<Value, ItemError> {
    match item.parameter(name) {
        Some(Value::String(s)) => serde_json::from_str(s).map_err(|e| {
            ItemError::validation(format!("Parameter '{}' is not valid JSON: {}", name, e))
        }),
        Some(value @ (Value::Object(_) | Value::Array(_))) => Ok(value.clone()),
        None | Some(Value::Null) => Err(ItemError::validation(format!(
            "Missing required parameter '{}'",
            name
        ))),
        Some(other) => Err(ItemError::validation(format!(
            "Parameter '{}' must be a JSON object, got {}",
            name, other
        ))),
    }
}

/// Query parameters for listing jobs
///
/// Accepts `{"keyvalue": [{"key": .., "value": ..}]}`, a bare list of such
/// pairs, or a flat object of key/value strings.
pub fn query(item: &InputItem, name: &str) -> Result<Vec<QueryParameter>, ItemError> {
    let value = match item.parameter(name) {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(value) => value,
    };

    let pairs = match value {
        Value::Object(map) if map.contains_key("keyvalue") => map["keyvalue"].clone(),
        Value::Object(map) => {
            return Ok(map
                .iter()
                .map(|(key, value)| match value {
                    Value::String(s) => QueryParameter::new(key.clone(), s.clone()),
                    Value::Null => QueryParameter {
                        key: key.clone(),
                        value: None,
                    },
                    other => QueryParameter::new(key.clone(), other.to_string()),
                })
                .collect());
        }
        other => other.clone(),
    };

    serde_json::from_value(pairs).map_err(|e| {
        ItemError::validation(format!("Parameter '{}' is not a list of key/value pairs: {}", name, e))
    })
}
