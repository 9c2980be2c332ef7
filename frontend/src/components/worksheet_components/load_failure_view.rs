use dioxus::prelude::*;
use dioxus_free_icons::icons::md_file_icons::MdFolder;
use dioxus_free_icons::icons::md_navigation_icons::{MdArrowBack, MdRefresh};

use crate::components::navigation_button::NavigationButton;
use crate::data_definitions::viewer_control::ViewerControl;
use crate::routes::Route;

/// Shown instead of the viewer when the document could not be loaded or was unusable.
#[component]
pub fn LoadFailureView(file_id: String, message: String) -> Element {
    let control = use_context::<ViewerControl>();
    rsx! {
        Title { "Study Space - Worksheet unavailable" }
        div {
            style: "
                width: 100%;
                height: 100%;
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                gap: 14px;
                background: #F5F6F8;
            ",
            h2 {
                style: "color: #B91C1C; font-size: 28px; margin: 0;",
                "This worksheet could not be opened"
            }
            div {
                style: "color: #475569; font-size: 14px;",
                "File: {file_id}"
            }
            pre {
                style: "
                    color: #7F1D1D;
                    border: 1px solid #FCA5A5;
                    background: white;
                    padding: 10px;
                    border-radius: 6px;
                    max-width: 600px;
                    text-wrap: auto;
                ",
                "{message}"
            }
            div {
                style: "display: flex; flex-direction: row; gap: 10px;",
                NavigationButton {
                    icon: MdArrowBack,
                    title: "Go back",
                    label: "Back",
                    onclick: move |_: ()| navigator().go_back(),
                }
                NavigationButton {
                    icon: MdRefresh,
                    title: "Try loading the worksheet again",
                    label: "Retry",
                    onclick: move |_: ()| control.retry_load.call(()),
                }
                NavigationButton {
                    icon: MdFolder,
                    title: "Open the file library",
                    label: "Library",
                    onclick: move |_: ()| {
                        navigator().push(Route::library_page(None));
                    },
                }
            }
        }
    }
}
