use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_editor_icons::MdInsertDriveFile;
use dioxus_free_icons::icons::md_file_icons::{MdFileUpload, MdFolder};

use crate::routes::Route;

/// Home page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "Study Space - Home" }
        div {
            id: "x-home-container",
            style: "
                display: flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                height: 100%;
                padding: 36px 40px;
                background: #F5F6F8;
                overflow: auto;
            ",

            MainTitle {}
            SubText {}

            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    gap: 20px;
                    flex-wrap: wrap;
                    align-items: stretch;
                    margin-top: 10px;
                ",
                OpenWorksheetCard {}
                UploadCard {}
            }
        }
    }
}

#[component]
fn MainTitle() -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                align-items: center;
                gap: 10px;
                color: #0F172A;
                font-size: 46px;
                font-weight: 500;
                letter-spacing: -0.02em;
            ",
            span { "Welcome to" }
            span { style: "color: #4F46E5;", "Study Space" }
        }
    }
}

#[component]
fn SubText() -> Element {
    rsx! {
        div {
            style: "
                color: #111827;
                font-size: 26px;
                line-height: 1.6;
                max-width: 680px;
                font-weight: 500;
            ",
            "Click any problem on a worksheet page to find the lecture moments and notes that explain it."
        }
    }
}

const CARD_STYLE: &str = "
    display: flex;
    flex-direction: column;
    gap: 14px;
    width: 520px;
    min-height: 240px;
    border-radius: 22px;
    padding: 22px 22px 26px 22px;
    color: white;
    box-shadow: 0 8px 24px rgba(0,0,0,0.12);
";

#[component]
fn OpenWorksheetCard() -> Element {
    rsx! {
        div {
            id: "x-card-open-worksheet",
            style: "{CARD_STYLE} background: linear-gradient(135deg, #2D208A 0%, #5B3DF5 100%);",
            div { style: "font-size: 30px; font-weight: 500;", "Open a worksheet" }
            div {
                style: "font-size: 19px; line-height: 1.5; color: rgba(255,255,255,0.92);",
                "Pick a worksheet from the library, or paste its file id below and hit Enter."
            }
            div { style: "height: 8px; padding-top: 7px; margin-top: 7px; border-top: 1px solid white; width: 100%;" }
            FileIdInput {}
            Link {
                to: Route::library_page(None),
                style: "display: flex; align-items: center; gap: 8px; color: white; font-size: 17px;",
                Icon { icon: MdFolder, style: "width: 20px; height: 20px;" }
                "Browse the library"
            }
        }
    }
}

#[component]
fn FileIdInput() -> Element {
    let nav = navigator();
    let mut file_id = use_signal(String::new);
    rsx! {
        div {
            style: "
                display: flex;
                align-items: center;
                gap: 10px;
                background-color: white;
                border-radius: 9999px;
                padding: 10px 14px;
                height: 42px;
                color: #111827;
            ",
            Icon { icon: MdInsertDriveFile, style: "width: 20px; height: 20px; color: #6B7280;" }
            input {
                r#type: "text",
                placeholder: "Worksheet file id",
                style: "
                    flex: 1;
                    border: none;
                    outline: none;
                    background: transparent;
                    color: #111827;
                    font-size: 14px;
                ",
                oninput: move |e| file_id.set(e.value()),
                onkeypress: move |e| {
                    if e.key() == Key::Enter {
                        e.prevent_default();
                        let id = file_id.read().trim().to_string();
                        if !id.is_empty() {
                            nav.push(Route::worksheet_page(id));
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn UploadCard() -> Element {
    rsx! {
        div {
            id: "x-card-upload",
            style: "{CARD_STYLE} background: linear-gradient(135deg, #0B7A2B 0%, #23A340 60%, #178E35 100%);",
            div { style: "font-size: 30px; font-weight: 500;", "Add material" }
            div {
                style: "font-size: 19px; line-height: 1.6; color: rgba(255,255,255,0.96);",
                "Upload lecture videos, worksheets and notes. Worksheets open in the viewer once their pages are extracted."
            }
            div { style: "flex-grow: 1;" }
            Link {
                to: Route::UploadPage {},
                style: "
                    display: flex;
                    align-items: center;
                    gap: 8px;
                    width: fit-content;
                    padding: 8px 14px;
                    border-radius: 8px;
                    background: white;
                    color: #0B7A2B;
                    text-decoration: none;
                    font-size: 16px;
                ",
                Icon { icon: MdFileUpload, style: "width: 20px; height: 20px;" }
                "Upload a file"
            }
        }
    }
}
