use dioxus::prelude::*;

use crate::components::error_boundary::ComponentErrorBoundary;

#[component]
pub fn SuspendWrapper(children: Element) -> Element {
    rsx! {
        SuspenseBoundary {
            fallback: |_s: SuspenseContext| rsx! {
                div {
                    width: "100%",
                    height: "100%",
                    display: "flex",
                    align_items: "center",
                    justify_content: "center",
                    LoadingIndicator { label: "Loading..." }
                }
            },
            ComponentErrorBoundary {
                children
            }
        }
    }
}

#[component]
pub fn LoadingIndicator(label: String) -> Element {
    rsx! {
        div {
            style: "
                color: #334155;
                font-size: 20px;
                border: 1px solid #CBD5E1;
                background: white;
                padding: 10px 16px;
                border-radius: 8px;
                margin: 15px;
            ",
            "{label}"
        }
    }
}
