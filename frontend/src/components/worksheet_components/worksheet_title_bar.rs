//! Title bar for the worksheet viewer.

use common::file_library::notes_download_href;
use dioxus::logger::tracing;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::MdNoteAdd;
use dioxus_free_icons::icons::md_editor_icons::{MdInsertDriveFile, MdInsertLink};
use dioxus_free_icons::icons::md_file_icons::MdFileDownload;
use dioxus_free_icons::icons::md_navigation_icons::MdArrowBack;

use crate::api::worksheet_api::generate_notes;
use crate::components::navigation_button::{BUTTON_STYLE, NavigationButton};
use crate::routes::Route;

#[component]
pub fn WorksheetTitleBar(file_id: ReadSignal<String>, file_name: ReadSignal<String>) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                gap: 12px;
                align-items: center;
                height: 54px;
                width: 100%;
                padding: 0 12px;
                background-color: #F8FCFF;
                flex-shrink: 0;
                border: 1px solid rgba(0, 0, 0, 0.3);
            ",
            NavigationButton {
                icon: MdArrowBack,
                title: "Back to library",
                onclick: move |_: ()| {
                    navigator().push(Route::library_page(None));
                },
            }
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 8px; font-size: 20px; overflow: hidden; white-space: nowrap; text-overflow: ellipsis;",
                Icon { icon: MdInsertDriveFile, style: "width: 20px; height: 20px; flex-shrink: 0;" }
                "{file_name}"
            }
            div { style: "flex-grow: 1;" }
            NotesActions { file_id }
            CopyLinkButton {}
        }
    }
}

#[component]
fn NotesActions(file_id: ReadSignal<String>) -> Element {
    let mut status = use_signal(|| None::<Result<String, String>>);

    let request_notes = move |_: ()| {
        status.set(Some(Ok("Requesting notes...".to_string())));
        spawn(async move {
            let outcome = match generate_notes(file_id()).await {
                Ok(job) => {
                    tracing::info!("notes job for {}: {:?} {}", file_id(), job.job_id, job.status);
                    Ok(format!("Notes {}", job.status))
                }
                Err(e) => Err(format!("Could not generate notes: {e}")),
            };
            status.set(Some(outcome));
        });
    };

    let status_line = match status() {
        Some(Ok(text)) => rsx! { span { style: "color: #334155; font-size: 14px;", "{text}" } },
        Some(Err(text)) => rsx! { span { style: "color: #B91C1C; font-size: 14px;", "{text}" } },
        None => rsx! {},
    };

    rsx! {
        {status_line}
        NavigationButton {
            icon: MdNoteAdd,
            title: "Generate study notes for this worksheet",
            label: "Generate notes",
            onclick: request_notes,
        }
        a {
            style: BUTTON_STYLE,
            class: "studyspace-hover-shadow-background",
            title: "Download generated notes",
            target: "_blank",
            href: notes_download_href(&file_id.read()),
            Icon { icon: MdFileDownload, style: "width: 22px; height: 22px;" }
        }
    }
}

#[component]
fn CopyLinkButton() -> Element {
    let mut copied = use_signal(|| false);

    let copy_link = move |_: ()| {
        let Some(window) = web_sys::window() else { return };
        let Ok(url) = window.location().href() else { return };
        let promise = window.navigator().clipboard().write_text(&url);
        spawn(async move {
            match wasm_bindgen_futures::JsFuture::from(promise).await {
                Ok(_) => {
                    tracing::info!("Link copied to clipboard: {url}");
                    copied.set(true);
                    gloo_timers::future::TimeoutFuture::new(2_000).await;
                    copied.set(false);
                }
                Err(e) => tracing::warn!("clipboard write failed: {e:?}"),
            }
        });
    };

    let label = if copied() { "Copied!" } else { "Copy link" };
    rsx! {
        NavigationButton {
            icon: MdInsertLink,
            title: "Copy a link to this worksheet",
            label: label.to_string(),
            onclick: copy_link,
        }
    }
}
