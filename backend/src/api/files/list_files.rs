use common::file_library::{FileListResponse, FileSummary};

use crate::{api_utils::api_client::{get_api_client, read_json, send_checked}, config::ApiConfig};

pub async fn list_files(config: &ApiConfig) -> anyhow::Result<Vec<FileSummary>> {
    let url = config.endpoint(&["files"])?;
    let client = get_api_client(config.document_timeout)?;
    let response = send_checked(client.get(url), "list files", config.document_timeout).await?;
    let files: FileListResponse = read_json(response, "list files").await?;
    Ok(files.into_files())
}
