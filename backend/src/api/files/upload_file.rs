use common::file_library::{FileKind, UploadResponse};
use reqwest::multipart::{Form, Part};

use crate::{api_utils::api_client::{get_api_client, read_json, send_checked}, config::ApiConfig};

/// Uploads one file. The multipart field is named after the kind (`video`, `worksheet` or `notes`).
pub async fn upload_file(config: &ApiConfig, kind: FileKind, file_name: String, data: Vec<u8>, title: Option<String>) -> anyhow::Result<UploadResponse> {
    if file_name.trim().is_empty() {
        anyhow::bail!("upload: no file selected");
    }
    if data.is_empty() {
        anyhow::bail!("upload: {file_name} is empty");
    }
    let url = config.endpoint(&["upload", kind.as_str()])?;
    tracing::info!("Uploading {file_name} as {kind} ({} bytes)", data.len());
    let mut form = Form::new().part(kind.as_str(), Part::bytes(data).file_name(file_name));
    if let Some(title) = title.filter(|t| !t.trim().is_empty()) {
        form = form.text("title", title);
    }
    let client = get_api_client(config.upload_timeout)?;
    let response = send_checked(client.post(url).multipart(form), "upload", config.upload_timeout).await?;
    read_json(response, "upload").await
}
