//! Form uploading a video, worksheet or notes file.

use base64::Engine;
use common::file_library::FileKind;
use dioxus::logger::tracing;
use dioxus::prelude::*;
use dioxus_free_icons::icons::md_file_icons::MdFileUpload;

use crate::api::files_api::upload_file;
use crate::components::navigation_button::NavigationButton;
use crate::routes::Route;

#[derive(Debug, Clone, PartialEq)]
enum UploadStatus {
    Idle,
    Reading,
    Ready { file_name: String, size: usize },
    Uploading,
    Done { file_id: String, kind: FileKind },
    Failed(String),
}

const FIELD_STYLE: &str = "
    font-size: 16px;
    padding: 8px 10px;
    border: 1px solid #CBD5E1;
    border-radius: 8px;
    background: white;
";

#[component]
pub fn UploadForm() -> Element {
    let mut kind = use_signal(|| FileKind::Worksheet);
    let mut title = use_signal(String::new);
    let mut selected = use_signal(|| None::<(String, Vec<u8>)>);
    let mut status = use_signal(|| UploadStatus::Idle);

    let on_file_change = move |evt: FormEvent| {
        let Some(file) = evt.files().into_iter().next() else {
            selected.set(None);
            status.set(UploadStatus::Idle);
            return;
        };
        status.set(UploadStatus::Reading);
        spawn(async move {
            let file_name = file.name();
            match file.read_bytes().await {
                Ok(bytes) => {
                    let data = bytes.to_vec();
                    status.set(UploadStatus::Ready { file_name: file_name.clone(), size: data.len() });
                    selected.set(Some((file_name, data)));
                }
                Err(e) => status.set(UploadStatus::Failed(format!("Could not read {file_name}: {e}"))),
            }
        });
    };

    let submit = move |_: ()| {
        let Some((file_name, data)) = selected() else {
            status.set(UploadStatus::Failed("Choose a file first.".to_string()));
            return;
        };
        let kind = kind();
        let title = Some(title()).filter(|t| !t.trim().is_empty());
        status.set(UploadStatus::Uploading);
        spawn(async move {
            let data_base64 = base64::engine::general_purpose::STANDARD.encode(&data);
            match upload_file(kind, file_name.clone(), data_base64, title).await {
                Ok(response) => {
                    tracing::info!("uploaded {file_name} as {kind}: {}", response.file_id);
                    selected.set(None);
                    status.set(UploadStatus::Done { file_id: response.file_id, kind });
                }
                Err(e) => status.set(UploadStatus::Failed(format!("Upload failed: {e}"))),
            }
        });
    };

    let busy = matches!(status(), UploadStatus::Reading | UploadStatus::Uploading);

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 14px;
                width: 520px;
                padding: 22px;
                background: white;
                border: 1px solid #E2E8F0;
                border-radius: 16px;
            ",
            label {
                style: "display: flex; flex-direction: column; gap: 6px;",
                "Kind"
                select {
                    style: FIELD_STYLE,
                    value: "{kind}",
                    onchange: move |e| {
                        if let Some(new_kind) = FileKind::from_str_opt(&e.value()) {
                            kind.set(new_kind);
                            selected.set(None);
                            status.set(UploadStatus::Idle);
                        }
                    },
                    for option_kind in FileKind::ALL {
                        option { key: "{option_kind}", value: option_kind.as_str(), "{option_kind.label()}" }
                    }
                }
            }
            label {
                style: "display: flex; flex-direction: column; gap: 6px;",
                "Title"
                input {
                    style: FIELD_STYLE,
                    r#type: "text",
                    placeholder: "Optional",
                    value: "{title}",
                    oninput: move |e| title.set(e.value()),
                }
            }
            label {
                style: "display: flex; flex-direction: column; gap: 6px;",
                "File ({kind().accepted_extensions()})"
                input {
                    style: FIELD_STYLE,
                    r#type: "file",
                    accept: kind().accepted_extensions(),
                    multiple: false,
                    onchange: on_file_change,
                }
            }
            NavigationButton {
                icon: MdFileUpload,
                title: "Upload the selected file",
                label: "Upload",
                disabled: busy || selected.read().is_none(),
                onclick: submit,
            }
            UploadStatusLine { status: status() }
        }
    }
}

#[component]
fn UploadStatusLine(status: UploadStatus) -> Element {
    match status {
        UploadStatus::Idle => rsx! {},
        UploadStatus::Reading => rsx! { div { style: "color: #334155;", "Reading file..." } },
        UploadStatus::Ready { file_name, size } => rsx! {
            div { style: "color: #334155;", "{file_name} ({size} bytes) ready to upload." }
        },
        UploadStatus::Uploading => rsx! { div { style: "color: #4F46E5;", "Uploading..." } },
        UploadStatus::Done { file_id, kind } => {
            let open = kind.has_pages().then(|| rsx! {
                Link { to: Route::worksheet_page(file_id.clone()), style: "color: #4F46E5;", "Open it" }
            });
            rsx! {
                div {
                    style: "display: flex; flex-direction: row; gap: 10px; color: #15803D;",
                    "Uploaded {kind.label()} {file_id}."
                    {open}
                    Link { to: Route::library_page(Some(kind)), style: "color: #4F46E5;", "Show in library" }
                }
            }
        }
        UploadStatus::Failed(message) => rsx! { div { style: "color: #B91C1C;", "{message}" } },
    }
}
