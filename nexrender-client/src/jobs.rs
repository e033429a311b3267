//! Job-related API endpoints

use crate::{NexrenderClient, path_segment};
use crate::error::Result;
use nexrender_core::domain::job::JobStatusSnapshot;
use nexrender_core::dto::job::{QueryParameter, query_pairs};
use reqwest::Method;
use serde_json::Value;

impl NexrenderClient {
    // =============================================================================
    // Jobs
    // =============================================================================

    /// Create a new render job
    ///
    /// # Arguments
    /// * `body` - The job payload (template, assets, outputs...)
    ///
    /// # Returns
    /// The created job as returned by the API
    ///
    /// # Example
    /// ```no_run
    /// # use nexrender_client::NexrenderClient;
    /// # use serde_json::json;
    /// # async fn example() -> nexrender_client::Result<()> {
    /// let client = NexrenderClient::new("https://api.nexrender.com/api/v2", "token");
    /// let job = client.create_job(&json!({
    ///     "template": { "id": "01TEMPLATE", "composition": "main" }
    /// })).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_job(&self, body: &Value) -> Result<Value> {
        let response = self.request(Method::POST, "/jobs").json(body).send().await?;

        self.handle_response(response).await
    }

    /// List jobs
    ///
    /// # Arguments
    /// * `query` - Query parameters; entries with an empty key are skipped
    pub async fn list_jobs(&self, query: &[QueryParameter]) -> Result<Value> {
        let response = self
            .request(Method::GET, "/jobs")
            .query(&query_pairs(query))
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Get a job by ID
    ///
    /// # Arguments
    /// * `job_id` - The job ULID
    ///
    /// # Returns
    /// The raw job body, of which only `status` is interpreted
    pub async fn get_job(&self, job_id: &str) -> Result<JobStatusSnapshot> {
        let response = self
            .request(Method::GET, &format!("/jobs/{}", path_segment(job_id)))
            .send()
            .await?;

        self.handle_response(response).await.map(JobStatusSnapshot::new)
    }
}
