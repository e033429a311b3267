//! Item action resolution
//!
//! Turns the `resource`/`operation` selectors and parameters of an item
//! into a typed [`Action`]. Unknown pairs fail with
//! [`ItemError::UnsupportedOperation`]; parameters of known pairs are
//! validated here so no request is sent for a malformed item.

use nexrender_core::domain::item::{BinaryRef, InputItem};
use nexrender_core::domain::job::JobReference;
use nexrender_core::domain::poll::{
    DEFAULT_POLL_INTERVAL_SECONDS, DEFAULT_TIMEOUT_MINUTES, PollSettings,
};
use nexrender_core::dto::job::QueryParameter;
use nexrender_core::dto::secret::CreateSecret;
use serde_json::Value;

use crate::error::ItemError;
use crate::service::params;

pub const DEFAULT_RESOURCE: &str = "job";
pub const DEFAULT_OPERATION: &str = "list";
pub const DEFAULT_BINARY_PROPERTY: &str = "data";

/// A fully resolved operation for one item
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ListJobs { query: Vec<QueryParameter> },
    GetJob { job: JobReference },
    WaitForJob { job: JobReference, settings: PollSettings },
    CreateJob { body: Value },

    ListTemplates,
    GetTemplate { id: String },
    CreateTemplate { body: Value },
    UpdateTemplate { id: String, body: Value },
    DeleteTemplate { id: String },
    GetTemplateDownloadUrl { id: String },
    GetTemplateUploadUrl { id: String },

    ListFonts,
    GetFont { id: String },
    DeleteFont { id: String },
    UploadFont { binary: BinaryRef, family_name: Option<String> },

    ListSecrets,
    CreateSecret(CreateSecret),
    DeleteSecret { id: String },
}

/// Resource and operation selected by an item, with defaults applied
pub fn selector(item: &InputItem) -> (String, String) {
    (
        params::string_or(item, "resource", DEFAULT_RESOURCE),
        params::string_or(item, "operation", DEFAULT_OPERATION),
    )
}

/// Poll settings of an item, clamped to their minimums
pub fn poll_settings(item: &InputItem) -> PollSettings {
    PollSettings::new(
        params::integer_or(item, "pollIntervalSeconds", DEFAULT_POLL_INTERVAL_SECONDS as i64),
        params::integer_or(item, "timeoutMinutes", DEFAULT_TIMEOUT_MINUTES as i64),
    )
}

impl Action {
    /// Resolves the action selected by `item`
    pub fn resolve(item: &InputItem) -> Result<Self, ItemError> {
        let (resource, operation) = selector(item);

        let action = match (resource.as_str(), operation.as_str()) {
            ("job", "list") => Action::ListJobs {
                query: params::query(item, "query")?,
            },
            ("job", "get") => {
                let job = JobReference::new(params::required_string(item, "jobId")?);
                if params::bool_or(item, "waitUntilDone", false)? {
                    Action::WaitForJob {
                        job,
                        settings: poll_settings(item),
                    }
                } else {
                    Action::GetJob { job }
                }
            }
            ("job", "create") => Action::CreateJob {
                body: params::json_body(item, "body")?,
            },

            ("template", "list") => Action::ListTemplates,
            ("template", "create") => Action::CreateTemplate {
                body: params::json_body(item, "body")?,
            },
            ("template", "get") => Action::GetTemplate {
                id: params::required_string(item, "templateId")?,
            },
            ("template", "update") => Action::UpdateTemplate {
                id: params::required_string(item, "templateId")?,
                body: params::json_body(item, "body")?,
            },
            ("template", "delete") => Action::DeleteTemplate {
                id: params::required_string(item, "templateId")?,
            },
            ("template", "getDownloadUrl") => Action::GetTemplateDownloadUrl {
                id: params::required_string(item, "templateId")?,
            },
            ("template", "getUploadUrl") => Action::GetTemplateUploadUrl {
                id: params::required_string(item, "templateId")?,
            },

            ("font", "list") => Action::ListFonts,
            ("font", "get") => Action::GetFont {
                id: params::required_string(item, "fontId")?,
            },
            ("font", "delete") => Action::DeleteFont {
                id: params::required_string(item, "fontId")?,
            },
            ("font", "upload") => {
                let property =
                    params::string_or(item, "binaryPropertyName", DEFAULT_BINARY_PROPERTY);
                let binary = item.binary.get(&property).cloned().ok_or_else(|| {
                    ItemError::validation(format!(
                        "No binary data found under property '{}'",
                        property
                    ))
                })?;
                let family_name = params::string_or(item, "familyName", "");
                Action::UploadFont {
                    binary,
                    family_name: (!family_name.is_empty()).then_some(family_name),
                }
            }

            ("secret", "list") => Action::ListSecrets,
            ("secret", "create") => Action::CreateSecret(CreateSecret {
                name: params::required_string(item, "name")?,
                value: params::required_string(item, "value")?,
            }),
            ("secret", "delete") => Action::DeleteSecret {
                id: params::required_string(item, "secretId")?,
            },

            _ => {
                return Err(ItemError::UnsupportedOperation {
                    resource,
                    operation,
                });
            }
        };

        Ok(action)
    }
}
