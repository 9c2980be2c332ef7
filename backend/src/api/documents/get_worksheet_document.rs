//! Endpoint for fetching a worksheet with its pages and text blocks.

use common::worksheet_document::WorksheetDocumentResponse;

use crate::{api_utils::api_client::{get_api_client, read_json, send_checked}, config::ApiConfig};

pub async fn get_worksheet_document(config: &ApiConfig, file_id: &str) -> anyhow::Result<WorksheetDocumentResponse> {
    let url = config.endpoint(&["files", file_id])?;
    tracing::info!("Fetching worksheet document {file_id}");
    let client = get_api_client(config.document_timeout)?;
    let response = send_checked(client.get(url), "fetch document", config.document_timeout).await?;
    let document: WorksheetDocumentResponse = read_json(response, "fetch document").await?;
    tracing::info!("Worksheet document {file_id} received: {} pages", document.pages.len());
    Ok(document)
}
