//! Template-related API endpoints

use crate::error::Result;
use crate::{NexrenderClient, path_segment, success_body};
use reqwest::Method;
use serde_json::Value;

impl NexrenderClient {
    // =============================================================================
    // Templates
    // =============================================================================

    /// Create a new template
    ///
    /// # Arguments
    /// * `body` - The template payload, e.g. `{"type":"aep","displayName":"My Template"}`
    pub async fn create_template(&self, body: &Value) -> Result<Value> {
        let response = self
            .request(Method::POST, "/templates")
            .json(body)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// List all templates
    pub async fn list_templates(&self) -> Result<Value> {
        let response = self.request(Method::GET, "/templates").send().await?;

        self.handle_response(response).await
    }

    /// Get a template by ID
    pub async fn get_template(&self, template_id: &str) -> Result<Value> {
        let response = self
            .request(Method::GET, &format!("/templates/{}", path_segment(template_id)))
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Update a template
    ///
    /// # Arguments
    /// * `template_id` - The template ID
    /// * `body` - Fields to change
    pub async fn update_template(&self, template_id: &str, body: &Value) -> Result<Value> {
        let response = self
            .request(Method::PATCH, &format!("/templates/{}", path_segment(template_id)))
            .json(body)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Delete a template
    ///
    /// Returns the API body, or `{"success": true}` when the API sends none.
    pub async fn delete_template(&self, template_id: &str) -> Result<Value> {
        let response = self
            .request(Method::DELETE, &format!("/templates/{}", path_segment(template_id)))
            .send()
            .await?;

        Ok(self
            .handle_optional_response(response)
            .await?
            .unwrap_or_else(success_body))
    }

    /// Get a presigned download URL for the template file
    pub async fn get_template_download_url(&self, template_id: &str) -> Result<Value> {
        let response = self
            .request(Method::GET, &format!("/templates/{}/upload", path_segment(template_id)))
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Get a fresh upload URL for the template file
    pub async fn get_template_upload_url(&self, template_id: &str) -> Result<Value> {
        let response = self
            .request(Method::PUT, &format!("/templates/{}/upload", path_segment(template_id)))
            .send()
            .await?;

        self.handle_response(response).await
    }
}
