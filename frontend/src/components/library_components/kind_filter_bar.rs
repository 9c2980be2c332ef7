use common::file_library::FileKind;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_content_icons::MdFilterList;

use crate::routes::Route;

/// Links switching the library between all files and one kind.
#[component]
pub fn KindFilterBar(kind_filter: ReadSignal<Option<FileKind>>) -> Element {
    let options = std::iter::once(None).chain(FileKind::ALL.into_iter().map(Some));
    rsx! {
        div {
            style: "display: flex; flex-direction: row; align-items: center; gap: 8px;",
            Icon { icon: MdFilterList, style: "width: 22px; height: 22px; color: #334155;" }
            for option in options {
                FilterChip { key: "{option:?}", option, active: kind_filter() == option }
            }
        }
    }
}

#[component]
fn FilterChip(option: Option<FileKind>, active: bool) -> Element {
    let label = option.map(|kind| kind.label()).unwrap_or("All");
    let (background, color) = if active { ("#4F46E5", "white") } else { ("white", "#0F172A") };
    rsx! {
        Link {
            to: Route::library_page(option),
            class: "studyspace-hover-shadow-background",
            style: "
                padding: 6px 14px;
                border-radius: 16px;
                border: 1px solid #4F46E5;
                background: {background};
                color: {color};
                text-decoration: none;
                font-size: 15px;
            ",
            "{label}"
        }
    }
}
