//! Tests for the Study Space API client against an in-process mock server.

use std::time::Duration;

use axum::{
    Json, Router,
    body::Bytes,
    extract::Path,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use backend::{
    api::{
        documents::{download_notes::get_notes_stream, generate_notes::generate_notes, get_worksheet_document::get_worksheet_document},
        files::{list_files::list_files, upload_file::upload_file},
        search::search_by_block_text,
    },
    api_utils::api_client::upstream_status,
    config::ApiConfig,
};
use common::{block_search::BlockSearchRequest, file_library::FileKind, worksheet_document::WorksheetDocument};
use futures::TryStreamExt;
use serde_json::{Value, json};

async fn spawn_mock_api(router: Router) -> ApiConfig {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind mock api");
    let addr = listener.local_addr().expect("mock api address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("mock api server");
    });
    ApiConfig::with_base_url(format!("http://{addr}"))
}

async fn get_file(Path(file_id): Path<String>) -> impl IntoResponse {
    if file_id != "ws1" {
        return (StatusCode::NOT_FOUND, Json(json!({ "success": false, "error": "not found" })));
    }
    (
        StatusCode::OK,
        Json(json!({
            "id": "ws1",
            "file_name": "fractions.pdf",
            "file_type": "pdf",
            "pages": [{
                "image": "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAQAAAC1HAwCAAAAC0lEQVR42mNkYAAAAAYAAjCB0C8AAAAASUVORK5CYII=",
                "pages": {
                    "dimensions": [2480, 3508],
                    "text_blocks": [{ "bounding_box": [[100, 200], [900, 200], [900, 260], [100, 260]], "text": "1) 3/4 + 1/8" }]
                }
            }]
        })),
    )
}

async fn search(Json(request): Json<Value>) -> Json<Value> {
    Json(json!({ "echo": request, "results": [{ "type": "video_segment", "start": 12.5, "end": 40.0 }] }))
}

async fn slow_search() -> Json<Value> {
    tokio::time::sleep(Duration::from_secs(5)).await;
    Json(json!({ "results": [] }))
}

fn mock_router() -> Router {
    Router::new()
        .route("/files", get(|| async { Json(json!({ "files": [{ "id": "ws1", "file_name": "fractions.pdf", "file_type": "pdf", "size": 2048 }, { "id": "v1", "file_name": "lecture.mp4", "file_type": "video" }] })) }))
        .route("/files/{file_id}", get(get_file))
        .route("/search", post(search))
        .route("/slow/search", post(slow_search))
        .route(
            "/upload/{kind}",
            post(|Path(kind): Path<String>, body: Bytes| async move {
                let body = String::from_utf8_lossy(&body).to_string();
                assert!(body.contains(&format!("name=\"{kind}\"")));
                assert!(body.contains("filename=\"hw.pdf\""));
                assert!(body.contains("name=\"title\""));
                Json(json!({ "success": true, "file_id": format!("{kind}-42") }))
            }),
        )
        .route("/notes/generate/{file_id}", post(|Path(file_id): Path<String>| async move { Json(json!({ "job_id": format!("job-{file_id}"), "status": "processing" })) }))
        .route(
            "/notes/download/{file_id}",
            get(|| async {
                (
                    [(header::CONTENT_TYPE, "application/pdf"), (header::CONTENT_DISPOSITION, "attachment; filename=\"fractions_notes.pdf\"")],
                    "%PDF-1.4 notes",
                )
            }),
        )
}

#[tokio::test]
async fn fetches_and_validates_worksheet_document() {
    let config = spawn_mock_api(mock_router()).await;
    let response = get_worksheet_document(&config, "ws1").await.expect("document");
    let document = WorksheetDocument::from_response("ws1", response).expect("valid document");
    assert_eq!(document.file_name(), "fractions.pdf");
    assert_eq!(document.page_count(), 1);
    assert_eq!(document.page(0).unwrap().text_blocks[0].text, "1) 3/4 + 1/8");
}

#[tokio::test]
async fn missing_document_reports_upstream_status() {
    let config = spawn_mock_api(mock_router()).await;
    let error = get_worksheet_document(&config, "nope").await.expect_err("missing document");
    assert_eq!(upstream_status(&error), Some(404));
}

#[tokio::test]
async fn searches_by_block_text() {
    let config = spawn_mock_api(mock_router()).await;
    let request = BlockSearchRequest { query: "1) 3/4 + 1/8".into(), file_id: "ws1".into() };
    let payload = search_by_block_text(&config, &request).await.expect("search");
    assert_eq!(payload["echo"], json!({ "query": "1) 3/4 + 1/8", "file_id": "ws1" }));
    assert_eq!(payload["results"][0]["type"], "video_segment");
}

#[tokio::test]
async fn search_times_out() {
    let mut config = spawn_mock_api(mock_router()).await;
    config.base_url = format!("{}/slow", config.base_url);
    config.search_timeout = Duration::from_millis(200);
    let request = BlockSearchRequest { query: "q".into(), file_id: "ws1".into() };
    let error = search_by_block_text(&config, &request).await.expect_err("timeout");
    assert!(format!("{error:#}").contains("timed out"), "{error:#}");
}

#[tokio::test]
async fn unreachable_api_is_an_error() {
    let config = ApiConfig::with_base_url("http://127.0.0.1:9");
    assert!(list_files(&config).await.is_err());
}

#[tokio::test]
async fn lists_files() {
    let config = spawn_mock_api(mock_router()).await;
    let files = list_files(&config).await.expect("files");
    let kinds: Vec<_> = files.iter().map(|f| f.kind()).collect();
    assert_eq!(kinds, vec![FileKind::Worksheet, FileKind::Video]);
}

#[tokio::test]
async fn uploads_with_kind_field() {
    let config = spawn_mock_api(mock_router()).await;
    let uploaded = upload_file(&config, FileKind::Worksheet, "hw.pdf".into(), b"%PDF-1.4".to_vec(), Some("Homework 3".into()))
        .await
        .expect("upload");
    assert_eq!(uploaded.file_id, "worksheet-42");
    assert!(upload_file(&config, FileKind::Notes, "empty.pdf".into(), vec![], None).await.is_err());
}

#[tokio::test]
async fn generates_and_downloads_notes() {
    let config = spawn_mock_api(mock_router()).await;
    let job = generate_notes(&config, "ws1").await.expect("job");
    assert_eq!(job.job_id.as_deref(), Some("job-ws1"));
    assert_eq!(job.status, "processing");

    let artifact = get_notes_stream(&config, "ws1").await.expect("notes");
    assert_eq!(artifact.file_name, "fractions_notes.pdf");
    assert_eq!(artifact.content_type, "application/pdf");
    let chunks: Vec<Bytes> = artifact.stream.try_collect().await.expect("body");
    assert_eq!(chunks.concat(), b"%PDF-1.4 notes".to_vec());
}
