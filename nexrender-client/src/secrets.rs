//! Secret-related API endpoints

use crate::error::Result;
use crate::{NexrenderClient, path_segment, success_body};
use nexrender_core::dto::secret::CreateSecret;
use reqwest::Method;
use serde_json::Value;

impl NexrenderClient {
    // =============================================================================
    // Secrets
    // =============================================================================

    /// List secrets
    pub async fn list_secrets(&self) -> Result<Value> {
        let response = self.request(Method::GET, "/secrets").send().await?;

        self.handle_response(response).await
    }

    /// Create or overwrite a secret
    ///
    /// # Arguments
    /// * `req` - Secret name and value
    pub async fn create_secret(&self, req: &CreateSecret) -> Result<Value> {
        let response = self.request(Method::PUT, "/secrets").json(req).send().await?;

        Ok(self
            .handle_optional_response(response)
            .await?
            .unwrap_or_else(success_body))
    }

    /// Delete a secret
    pub async fn delete_secret(&self, secret_id: &str) -> Result<Value> {
        let response = self
            .request(Method::DELETE, &format!("/secrets/{}", path_segment(secret_id)))
            .send()
            .await?;

        Ok(self
            .handle_optional_response(response)
            .await?
            .unwrap_or_else(success_body))
    }
}
