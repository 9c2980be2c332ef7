//! Root of the worksheet viewer.
//!
//! Owns the [`ViewerSession`], loads the document once per file id and runs
//! block searches. Children get read access plus callbacks through
//! [`ViewerControl`].

use common::viewer_session::{DocumentLoadState, ViewerSession};
use dioxus::core::Task;
use dioxus::logger::tracing;
use dioxus::prelude::*;

use crate::api::worksheet_api::{fetch_worksheet_document, search_by_block_text};
use crate::components::suspend_boundary::LoadingIndicator;
use crate::components::worksheet_components::load_failure_view::LoadFailureView;
use crate::components::worksheet_components::overlay_renderer::PageOverlayCanvas;
use crate::components::worksheet_components::page_controls::PageControls;
use crate::components::worksheet_components::results_panel::ResultsPanel;
use crate::components::worksheet_components::worksheet_title_bar::WorksheetTitleBar;
use crate::data_definitions::viewer_control::ViewerControl;

enum ShellView {
    Loading,
    Failed { file_id: String, message: String },
    Loaded { file_name: String },
}

fn cancel_pending_search(mut pending_search: Signal<Option<Task>>) {
    if let Some(task) = pending_search.write().take() {
        task.cancel();
    }
}

#[component]
pub fn WorksheetViewerRoot(file_id: ReadSignal<String>) -> Element {
    let mut session = use_signal(ViewerSession::new);
    let pending_search = use_signal(|| None::<Task>);

    let mut document_load = use_resource(move || async move {
        let file_id = file_id();
        cancel_pending_search(pending_search);
        let ticket = session.write().begin_load(file_id.clone());
        tracing::info!("loading worksheet {file_id}");
        let outcome = fetch_worksheet_document(file_id).await.map_err(|e| e.to_string());
        session.write().finish_load(&ticket, outcome);
    });

    let select_block = use_callback(move |block_index: usize| {
        let Some(ticket) = session.write().select_block(block_index) else {
            tracing::warn!("block {block_index} is not on the current page");
            return;
        };
        tracing::info!("block {block_index} selected: {:?}", ticket.request.query);
        cancel_pending_search(pending_search);
        let task = spawn(async move {
            let outcome = search_by_block_text(ticket.request.clone()).await.map_err(|e| e.to_string());
            if let Err(message) = &outcome {
                tracing::warn!("search for block {} failed: {message}", ticket.block_index);
            }
            session.write().complete_search(&ticket, outcome);
        });
        let mut pending_search = pending_search;
        pending_search.set(Some(task));
    });

    let go_to_previous_page = use_callback(move |_: ()| {
        if !session.peek().can_go_to_previous_page() {
            return;
        }
        cancel_pending_search(pending_search);
        session.write().go_to_previous_page();
    });

    let go_to_next_page = use_callback(move |_: ()| {
        if !session.peek().can_go_to_next_page() {
            return;
        }
        cancel_pending_search(pending_search);
        session.write().go_to_next_page();
    });

    use_context_provider(move || ViewerControl {
        session: session.into(),
        select_block,
        go_to_previous_page,
        go_to_next_page,
        retry_load: Callback::new(move |_: ()| document_load.restart()),
    });

    let view = match session.read().load_state() {
        DocumentLoadState::NotStarted | DocumentLoadState::Loading { .. } => ShellView::Loading,
        DocumentLoadState::Failed { file_id, error } => ShellView::Failed { file_id: file_id.clone(), message: error.to_string() },
        DocumentLoadState::Loaded(document) => ShellView::Loaded { file_name: document.file_name().to_string() },
    };

    match view {
        ShellView::Loading => rsx! {
            div {
                style: "width: 100%; height: 100%; display: flex; align-items: center; justify-content: center;",
                LoadingIndicator { label: "Loading worksheet..." }
            }
        },
        ShellView::Failed { file_id, message } => rsx! {
            LoadFailureView { file_id, message }
        },
        ShellView::Loaded { file_name } => rsx! {
            Title { "Study Space - {file_name}" }
            div {
                style: "
                    display: flex;
                    flex-direction: column;
                    height: 100%;
                    width: 100%;
                    overflow: hidden;
                ",
                WorksheetTitleBar { file_id: file_id(), file_name }
                div {
                    style: "
                        display: flex;
                        flex-direction: row;
                        width: 100%;
                        height: calc(100% - 54px);
                    ",
                    div {
                        id: "x-worksheet-page-panel",
                        style: "
                            height: 100%;
                            width: 62%;
                            min-width: 400px;
                            background-color: #ECEEF2;
                            display: flex;
                            flex-direction: column;
                            gap: 10px;
                            padding: 12px;
                            overflow-y: auto;
                        ",
                        PageControls {}
                        PageOverlayCanvas {}
                    }
                    div {
                        id: "x-worksheet-results-panel",
                        style: "
                            height: 100%;
                            width: 38%;
                            min-width: 300px;
                            border-left: 1px solid rgba(0, 0, 0, 0.3);
                        ",
                        ResultsPanel {}
                    }
                }
            }
        },
    }
}
