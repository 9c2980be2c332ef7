//! Server functions for the worksheet viewer.

use common::{block_search::BlockSearchRequest, file_library::NotesJobStatus, worksheet_document::WorksheetDocumentResponse};
use dioxus::prelude::*;

/// Keeps the upstream HTTP status (e.g. 404 for an unknown file) when there is one.
#[cfg(feature = "server")]
pub(crate) fn to_server_fn_error(e: anyhow::Error) -> ServerFnError {
    let code = backend::api_utils::api_client::upstream_status(&e).unwrap_or(500);
    ServerFnError::ServerError { message: format!("{e:#}"), code, details: None }
}

#[server]
pub async fn fetch_worksheet_document(file_id: String) -> Result<WorksheetDocumentResponse, ServerFnError> {
    let config = backend::config::ApiConfig::global();
    backend::api::documents::get_worksheet_document::get_worksheet_document(config, &file_id)
        .await
        .map_err(to_server_fn_error)
}

#[server]
pub async fn search_by_block_text(request: BlockSearchRequest) -> Result<serde_json::Value, ServerFnError> {
    let config = backend::config::ApiConfig::global();
    backend::api::search::search_by_block_text(config, &request).await.map_err(to_server_fn_error)
}

#[server]
pub async fn generate_notes(file_id: String) -> Result<NotesJobStatus, ServerFnError> {
    let config = backend::config::ApiConfig::global();
    backend::api::documents::generate_notes::generate_notes(config, &file_id)
        .await
        .map_err(to_server_fn_error)
}
