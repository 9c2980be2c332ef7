use common::file_library::{FileKind, FileSummary};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::{MdDescription, MdOpenInNew};
use dioxus_free_icons::icons::md_av_icons::MdVideoLibrary;
use dioxus_free_icons::icons::md_editor_icons::MdInsertDriveFile;

use crate::components::navigation_button::BUTTON_STYLE;
use crate::routes::Route;

#[component]
pub fn FileCard(file: FileSummary) -> Element {
    let kind = file.kind();
    let icon = match kind {
        FileKind::Video => rsx! { Icon { icon: MdVideoLibrary, style: "width: 26px; height: 26px;" } },
        FileKind::Worksheet => rsx! { Icon { icon: MdInsertDriveFile, style: "width: 26px; height: 26px;" } },
        FileKind::Notes => rsx! { Icon { icon: MdDescription, style: "width: 26px; height: 26px;" } },
    };
    let route = kind.has_pages().then(|| Route::worksheet_page(file.id.clone()));

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 14px;
                padding: 12px 16px;
                background: white;
                border: 1px solid #E2E8F0;
                border-radius: 10px;
            ",
            div { style: "color: #4F46E5; display: flex;", {icon} }
            div {
                style: "display: flex; flex-direction: column; gap: 2px; flex-grow: 1; min-width: 0;",
                div {
                    style: "font-size: 17px; color: #0F172A; overflow: hidden; white-space: nowrap; text-overflow: ellipsis;",
                    "{file.file_name}"
                }
                div {
                    style: "font-size: 13px; color: #64748B;",
                    "{kind.label()} · {file.display_size()} · {file.display_uploaded_at()}"
                }
            }
            if let Some(route) = route {
                Link {
                    to: route.clone(),
                    class: "studyspace-hover-shadow-background",
                    style: "{BUTTON_STYLE}",
                    "Open"
                }
                a {
                    style: BUTTON_STYLE,
                    class: "studyspace-hover-shadow-background",
                    title: "Open in a new tab",
                    target: "_blank",
                    href: route.to_string(),
                    Icon { icon: MdOpenInNew, style: "width: 22px; height: 22px;" }
                }
            }
        }
    }
}
