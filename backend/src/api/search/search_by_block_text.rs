use common::block_search::BlockSearchRequest;

use crate::{api_utils::api_client::{get_api_client, read_json, send_checked}, config::ApiConfig};

/// Searches the index for material related to a clicked text block.
///
/// The payload is returned as-is; only the frontend's results panel looks inside it.
pub async fn search_by_block_text(config: &ApiConfig, request: &BlockSearchRequest) -> anyhow::Result<serde_json::Value> {
    let url = config.endpoint(&["search"])?;
    tracing::info!("Searching {:?} in file {}", request.query, request.file_id);
    let client = get_api_client(config.search_timeout)?;
    let response = send_checked(client.post(url).json(request), "search", config.search_timeout).await?;
    read_json(response, "search").await
}
