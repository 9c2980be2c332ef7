//! Right-hand panel showing what the selected block's search returned.

use common::block_search::{ResolvedBlock, ResultsPanelView};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::MdSearchOff;

use crate::data_definitions::viewer_control::ViewerControl;

#[component]
pub fn ResultsPanel() -> Element {
    let control = use_context::<ViewerControl>();
    let session = control.session.read();

    let body = match session.search().panel_view() {
        ResultsPanelView::NothingSelected => rsx! {
            PanelHint { text: "Click a problem on the page to find related material." }
        },
        ResultsPanelView::Searching { block_index, stale } => {
            let stale = stale.cloned().map(|resolved| rsx! { ResolvedBlockView { resolved, stale: true } });
            rsx! {
                StatusLine { text: "Searching for problem {block_index + 1}...", color: "#4F46E5" }
                {stale}
            }
        }
        ResultsPanelView::Ready(resolved) => rsx! {
            ResolvedBlockView { resolved: resolved.clone(), stale: false }
        },
        ResultsPanelView::Failed { error, stale } => {
            let stale = stale.cloned().map(|resolved| rsx! { ResolvedBlockView { resolved, stale: true } });
            rsx! {
                StatusLine { text: "Search failed: {error.message}", color: "#B91C1C" }
                {stale}
            }
        }
    };

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 10px;
                height: 100%;
                width: 100%;
                padding: 14px;
                overflow-y: auto;
                background: #F8FCFF;
            ",
            div {
                style: "font-size: 20px; font-weight: 500; color: #0F172A;",
                "Related material"
            }
            {body}
        }
    }
}

#[component]
fn ResolvedBlockView(resolved: ResolvedBlock, stale: bool) -> Element {
    let class = if stale { "studyspace-stale-result" } else { "" };
    let query = resolved.result.query.clone();
    let content = if resolved.result.is_empty() {
        rsx! {
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 8px; color: #475569;",
                Icon { icon: MdSearchOff, style: "width: 22px; height: 22px;" }
                "Nothing found for this problem."
            }
        }
    } else {
        rsx! {
            pre {
                style: "
                    margin: 0;
                    padding: 10px;
                    border: 1px solid #CBD5E1;
                    border-radius: 6px;
                    background: white;
                    font-size: 13px;
                    text-wrap: auto;
                    overflow-x: auto;
                ",
                "{resolved.result.to_pretty_string()}"
            }
        }
    };

    rsx! {
        div {
            class: class,
            style: "display: flex; flex-direction: column; gap: 8px;",
            div {
                style: "font-size: 14px; color: #334155;",
                span { style: "font-weight: 600;", "Problem {resolved.block_index + 1}: " }
                span { style: "font-style: italic;", "{query}" }
            }
            {content}
        }
    }
}

#[component]
fn StatusLine(text: String, color: String) -> Element {
    rsx! {
        div {
            style: "font-size: 15px; color: {color}; padding: 6px 0;",
            "{text}"
        }
    }
}

#[component]
fn PanelHint(text: String) -> Element {
    rsx! {
        div {
            style: "
                color: #64748B;
                font-size: 16px;
                border: 1px dashed #CBD5E1;
                border-radius: 8px;
                padding: 24px;
                text-align: center;
            ",
            "{text}"
        }
    }
}
