//! Item handlers backed by the Nexrender client
//!
//! [`NexrenderItemHandler`] executes whichever action an item selects.
//! [`WaitForJobHandler`] only waits for jobs, and attributes its failures to
//! the job it was waiting on.

use async_trait::async_trait;
use nexrender_client::NexrenderClient;
use nexrender_core::domain::item::{BinaryRef, InputItem};
use nexrender_core::domain::job::JobReference;
use nexrender_core::dto::font::FontUpload;
use serde_json::Value;
use tracing::info;

use crate::error::ItemError;
use crate::scheduler::{ItemHandler, Poller};
use crate::service::action::{self, Action};
use crate::service::params;

/// Executes any supported resource/operation pair
#[derive(Debug, Clone)]
pub struct NexrenderItemHandler {
    client: NexrenderClient,
    poller: Poller,
}

impl NexrenderItemHandler {
    pub fn new(client: NexrenderClient) -> Self {
        Self::with_poller(client, Poller::new())
    }

    pub fn with_poller(client: NexrenderClient, poller: Poller) -> Self {
        Self { client, poller }
    }

    /// Executes a resolved action
    pub async fn execute(&self, action: Action) -> Result<Value, ItemError> {
        let client = &self.client;

        let body = match action {
            Action::ListJobs { query } => client.list_jobs(&query).await?,
            Action::GetJob { job } => client.get_job(job.as_str()).await?.into_body(),
            Action::WaitForJob { job, settings } => self
                .poller
                .wait_for_job(&job, settings, client)
                .await?
                .into_body(),
            Action::CreateJob { body } => client.create_job(&body).await?,

            Action::ListTemplates => client.list_templates().await?,
            Action::GetTemplate { id } => client.get_template(&id).await?,
            Action::CreateTemplate { body } => client.create_template(&body).await?,
            Action::UpdateTemplate { id, body } => client.update_template(&id, &body).await?,
            Action::DeleteTemplate { id } => client.delete_template(&id).await?,
            Action::GetTemplateDownloadUrl { id } => client.get_template_download_url(&id).await?,
            Action::GetTemplateUploadUrl { id } => client.get_template_upload_url(&id).await?,

            Action::ListFonts => client.list_fonts().await?,
            Action::GetFont { id } => client.get_font(&id).await?,
            Action::DeleteFont { id } => client.delete_font(&id).await?,
            Action::UploadFont {
                binary,
                family_name,
            } => {
                let upload = load_font(&binary, family_name).await?;
                client.upload_font(upload).await?
            }

            Action::ListSecrets => client.list_secrets().await?,
            Action::CreateSecret(req) => client.create_secret(&req).await?,
            Action::DeleteSecret { id } => client.delete_secret(&id).await?,
        };

        Ok(body)
    }
}

#[async_trait]
impl ItemHandler for NexrenderItemHandler {
    fn operation_name(&self, item: &InputItem) -> String {
        let (resource, operation) = action::selector(item);
        format!("{}.{}", resource, operation)
    }

    async fn handle(&self, index: usize, item: &InputItem) -> Result<Value, ItemError> {
        let action = Action::resolve(item)?;
        info!("Item {}: executing {}", index, self.operation_name(item));
        self.execute(action).await
    }
}

/// Reads a font file referenced by an item
async fn load_font(binary: &BinaryRef, family_name: Option<String>) -> Result<FontUpload, ItemError> {
    let bytes = tokio::fs::read(&binary.path).await.map_err(|e| {
        ItemError::validation(format!(
            "Failed to read binary data from {}: {}",
            binary.path.display(),
            e
        ))
    })?;

    let mut upload = FontUpload::new(bytes);

    let file_name = binary.file_name.clone().or_else(|| {
        binary
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
    });
    if let Some(file_name) = file_name {
        upload = upload.with_file_name(file_name);
    }
    if let Some(mime_type) = &binary.mime_type {
        upload = upload.with_content_type(mime_type.clone());
    }
    if let Some(family_name) = family_name {
        upload = upload.with_family_name(family_name);
    }

    Ok(upload)
}

/// Waits for the job named by each item's `jobId`
#[derive(Debug, Clone)]
pub struct WaitForJobHandler {
    client: NexrenderClient,
    poller: Poller,
}

impl WaitForJobHandler {
    pub fn new(client: NexrenderClient) -> Self {
        Self::with_poller(client, Poller::new())
    }

    pub fn with_poller(client: NexrenderClient, poller: Poller) -> Self {
        Self { client, poller }
    }
}

#[async_trait]
impl ItemHandler for WaitForJobHandler {
    fn operation_name(&self, _item: &InputItem) -> String {
        "job.wait".to_string()
    }

    fn failure_job_id(&self, item: &InputItem) -> Option<String> {
        Some(params::string_or(item, "jobId", ""))
    }

    async fn handle(&self, index: usize, item: &InputItem) -> Result<Value, ItemError> {
        let job = JobReference::new(params::required_string(item, "jobId")?);
        let settings = action::poll_settings(item);
        info!("Item {}: waiting for job {}", index, job);

        let snapshot = self
            .poller
            .wait_for_job(&job, settings, &self.client)
            .await?;

        Ok(snapshot.into_body())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RunConfig;
    use crate::scheduler::BatchRunner;
    use crate::testing::ManualClock;
    use nexrender_core::domain::item::ItemResult;
    use serde_json::json;
    use std::io::Write;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> NexrenderClient {
        NexrenderClient::new(server.uri(), "test-token")
    }

    fn job_get(job_id: &str) -> InputItem {
        InputItem::new()
            .with_parameter("resource", "job")
            .with_parameter("operation", "get")
            .with_parameter("jobId", job_id)
    }

    #[tokio::test]
    async fn test_wait_until_done_polls_until_finished() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/jobs/01ABC"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "queued" })))
            .up_to_n_times(2)
            .expect(2)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/jobs/01ABC"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "status": "finished", "url": "https://x/out.mp4" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let clock = ManualClock::new();
        let handler =
            NexrenderItemHandler::with_poller(client_for(&server), Poller::with_clock(clock.clone()));
        let item = job_get("01ABC")
            .with_parameter("waitUntilDone", true)
            .with_parameter("pollIntervalSeconds", 1);

        let body = handler.handle(0, &item).await.unwrap();

        assert_eq!(body, json!({ "status": "finished", "url": "https://x/out.mp4" }));
        assert_eq!(clock.sleeps(), 2);
    }

    #[tokio::test]
    async fn test_get_without_wait_fetches_once() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/jobs/01ABC"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "queued" })))
            .expect(1)
            .mount(&server)
            .await;

        let handler = NexrenderItemHandler::new(client_for(&server));
        let body = handler.handle(0, &job_get("01ABC")).await.unwrap();

        assert_eq!(body, json!({ "status": "queued" }));
    }

    #[tokio::test]
    async fn test_batch_mixes_successes_and_failures() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/jobs/01OK"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "finished" })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/jobs/01GONE"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "error": "Job not found" })))
            .mount(&server)
            .await;

        let handler = NexrenderItemHandler::new(client_for(&server));
        let items = vec![
            job_get("01OK"),
            job_get("01GONE"),
            InputItem::new()
                .with_parameter("resource", "font")
                .with_parameter("operation", "rename"),
            job_get(""),
        ];

        let results = BatchRunner::new(RunConfig::continue_on_fail())
            .run(&items, &handler)
            .await
            .unwrap();

        assert_eq!(
            results,
            vec![
                ItemResult::ok(0, json!({ "status": "finished" })),
                ItemResult::failed(1, "HTTP 404: Job not found"),
                ItemResult::failed(2, "Operation not implemented: font.rename"),
                ItemResult::failed(3, "Missing required parameter 'jobId'"),
            ]
        );
    }

    #[tokio::test]
    async fn test_abort_reports_index_and_operation() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/templates"))
            .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
            .mount(&server)
            .await;

        let handler = NexrenderItemHandler::new(client_for(&server));
        let items = vec![
            InputItem::new()
                .with_parameter("resource", "template")
                .with_parameter("operation", "list"),
            job_get("01NEVER"),
        ];

        let err = BatchRunner::new(RunConfig::abort_on_fail())
            .run(&items, &handler)
            .await
            .unwrap_err();

        assert_eq!(err.index(), 0);
        assert_eq!(
            err.to_string(),
            "Item 0 (template.list) failed: HTTP 500: upstream exploded"
        );
    }

    #[tokio::test]
    async fn test_font_upload_reads_binary_file() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/fonts"))
            .and(body_string_contains("filename=\"Inter-Bold.ttf\""))
            .and(body_string_contains("FAKEFONT"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "01FONT" })))
            .expect(1)
            .mount(&server)
            .await;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"FAKEFONT").unwrap();

        let item = InputItem::new()
            .with_parameter("resource", "font")
            .with_parameter("operation", "upload")
            .with_binary(
                "data",
                BinaryRef::new(file.path()).with_file_name("Inter-Bold.ttf"),
            );

        let body = NexrenderItemHandler::new(client_for(&server))
            .handle(0, &item)
            .await
            .unwrap();

        assert_eq!(body, json!({ "id": "01FONT", "success": true }));
    }

    #[tokio::test]
    async fn test_wait_handler_attributes_failure_to_job() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/jobs/01XYZ"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "processing" })))
            .mount(&server)
            .await;

        let clock = ManualClock::new();
        let handler =
            WaitForJobHandler::with_poller(client_for(&server), Poller::with_clock(clock.clone()));
        let items = vec![
            InputItem::new()
                .with_parameter("jobId", "01XYZ")
                .with_parameter("pollIntervalSeconds", 60)
                .with_parameter("timeoutMinutes", 1),
        ];

        let results = BatchRunner::new(RunConfig::continue_on_fail())
            .run(&items, &handler)
            .await
            .unwrap();

        let record = results.into_iter().next().unwrap().into_record();
        assert_eq!(
            record.json,
            json!({
                "jobId": "01XYZ",
                "error": "Timed out waiting for job 01XYZ after 1 minute(s)"
            })
        );
    }
}
