use axum::{body::Body, extract::Path, http::StatusCode, response::{IntoResponse, Response}};
use tracing::info;

use crate::{api::documents::download_notes::{attachment_header, get_notes_stream}, api_utils::api_client::upstream_status, config::ApiConfig};

async fn _download_notes(Path(file_id): Path<String>) -> anyhow::Result<impl IntoResponse> {
    info!("Downloading notes: {}", file_id);

    let artifact = get_notes_stream(ApiConfig::global(), &file_id).await?;
    let headers: [(String, String); 2] = [
        ("Content-Type".to_string(), artifact.content_type.clone()),
        ("Content-Disposition".to_string(), attachment_header(&artifact.file_name)),
    ];
    let body = Body::from_stream(artifact.stream);
    Ok((headers, body).into_response())
}

pub async fn download_notes(Path(file_id): Path<String>) -> Response {
    match _download_notes(Path(file_id)).await {
        Ok(response) => response.into_response(),
        Err(e) => {
            tracing::error!("download_notes: request failed: {:#?}", e);
            let status = upstream_status(&e)
                .and_then(|code| StatusCode::from_u16(code).ok())
                .unwrap_or(StatusCode::BAD_GATEWAY);
            return (status, Body::from(e.to_string())).into_response();
        }
    }
}
