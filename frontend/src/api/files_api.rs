//! Server functions for the file library and uploads.

use common::file_library::{FileKind, FileSummary, UploadResponse};
use dioxus::prelude::*;

#[cfg(feature = "server")]
use crate::api::worksheet_api::to_server_fn_error;

#[server]
pub async fn list_files() -> Result<Vec<FileSummary>, ServerFnError> {
    backend::api::files::list_files::list_files(backend::config::ApiConfig::global())
        .await
        .map_err(to_server_fn_error)
}

/// `data_base64` is the file content, base64 encoded for the JSON transport.
#[server]
pub async fn upload_file(kind: FileKind, file_name: String, data_base64: String, title: Option<String>) -> Result<UploadResponse, ServerFnError> {
    use base64::Engine;

    let data = base64::engine::general_purpose::STANDARD
        .decode(data_base64.as_bytes())
        .map_err(|e| ServerFnError::ServerError { message: format!("upload: file content is not base64: {e}"), code: 400, details: None })?;
    backend::api::files::upload_file::upload_file(backend::config::ApiConfig::global(), kind, file_name, data, title)
        .await
        .map_err(to_server_fn_error)
}
