//! Endpoint for starting a notes generation job.

use common::file_library::NotesJobStatus;

use crate::{api_utils::api_client::{get_api_client, read_json, send_checked}, config::ApiConfig};

pub async fn generate_notes(config: &ApiConfig, file_id: &str) -> anyhow::Result<NotesJobStatus> {
    let url = config.endpoint(&["notes", "generate", file_id])?;
    tracing::info!("Requesting notes generation for {file_id}");
    let client = get_api_client(config.document_timeout)?;
    let response = send_checked(client.post(url), "generate notes", config.document_timeout).await?;
    read_json(response, "generate notes").await
}
