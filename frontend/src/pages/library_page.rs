use common::file_library::FileKind;
use dioxus::prelude::*;

use crate::api::files_api::list_files;
use crate::components::error_boundary::ComponentErrorDisplay;
use crate::components::library_components::file_card::FileCard;
use crate::components::library_components::kind_filter_bar::KindFilterBar;
use crate::components::suspend_boundary::LoadingIndicator;
use crate::data_definitions::url_param::UrlParam;

/// File library page
#[component]
pub fn LibraryPage(kind_filter: UrlParam<Option<FileKind>>) -> Element {
    rsx! {
        Title { "Study Space - Library" }
        LibraryRoot { kind_filter: kind_filter.0 }
    }
}

#[component]
fn LibraryRoot(kind_filter: ReadSignal<Option<FileKind>>) -> Element {
    let mut files = use_resource(list_files);

    let listing = match &*files.read() {
        None => rsx! { LoadingIndicator { label: "Loading files..." } },
        Some(Err(e)) => rsx! {
            ComponentErrorDisplay {
                error_txt: e.to_string(),
                button {
                    style: "color: #4F46E5; font-size: 16px; border: 1px solid #4F46E5; background: white; padding: 8px 14px; border-radius: 8px; cursor: pointer;",
                    onclick: move |_| files.restart(),
                    "Reload"
                }
            }
        },
        Some(Ok(all_files)) => {
            let shown: Vec<_> = all_files.iter().filter(|file| kind_filter().is_none_or(|kind| file.kind() == kind)).cloned().collect();
            if shown.is_empty() {
                rsx! {
                    div { style: "color: #64748B; font-size: 16px; padding: 20px;", "No files here yet." }
                }
            } else {
                rsx! {
                    for file in shown {
                        FileCard { key: "{file.id}", file: file.clone() }
                    }
                }
            }
        }
    };

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 16px;
                width: 100%;
                height: 100%;
                padding: 36px 40px;
                background: #F5F6F8;
                overflow: auto;
            ",
            div {
                style: "font-size: 34px; font-weight: 500; color: #0F172A;",
                "Library"
            }
            KindFilterBar { kind_filter }
            div {
                style: "display: flex; flex-direction: column; gap: 10px; max-width: 900px;",
                {listing}
            }
        }
    }
}
