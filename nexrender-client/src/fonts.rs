//! Font-related API endpoints

use crate::error::{ClientError, Result};
use crate::{NexrenderClient, path_segment, success_body};
use nexrender_core::dto::font::FontUpload;
use reqwest::Method;
use reqwest::multipart::{Form, Part};
use serde_json::Value;

impl NexrenderClient {
    // =============================================================================
    // Fonts
    // =============================================================================

    /// List fonts
    pub async fn list_fonts(&self) -> Result<Value> {
        let response = self.request(Method::GET, "/fonts").send().await?;

        self.handle_response(response).await
    }

    /// Get a font by ID
    pub async fn get_font(&self, font_id: &str) -> Result<Value> {
        let response = self
            .request(Method::GET, &format!("/fonts/{}", path_segment(font_id)))
            .send()
            .await?;

        Ok(self
            .handle_optional_response(response)
            .await?
            .unwrap_or_else(success_body))
    }

    /// Delete a font
    pub async fn delete_font(&self, font_id: &str) -> Result<Value> {
        let response = self
            .request(Method::DELETE, &format!("/fonts/{}", path_segment(font_id)))
            .send()
            .await?;

        Ok(self
            .handle_optional_response(response)
            .await?
            .unwrap_or_else(success_body))
    }

    /// Upload a font file
    ///
    /// Sends `multipart/form-data` with the file in the `font` part and the
    /// optional `familyName` text field. `success: true` is added to the
    /// returned object unless the API already set it.
    pub async fn upload_font(&self, upload: FontUpload) -> Result<Value> {
        let part = Part::bytes(upload.bytes)
            .file_name(upload.file_name)
            .mime_str(&upload.content_type)
            .map_err(|e| {
                ClientError::InvalidRequest(format!(
                    "invalid content type '{}': {}",
                    upload.content_type, e
                ))
            })?;

        let mut form = Form::new().part("font", part);
        if let Some(family_name) = upload.family_name {
            form = form.text("familyName", family_name);
        }

        let response = self
            .request(Method::POST, "/fonts")
            .multipart(form)
            .send()
            .await?;

        let body = self.handle_optional_response(response).await?;
        Ok(match body {
            Some(Value::Object(mut fields)) => {
                fields
                    .entry("success")
                    .or_insert(Value::Bool(true));
                Value::Object(fields)
            }
            Some(other) => other,
            None => success_body(),
        })
    }
}
