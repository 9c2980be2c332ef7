use dioxus::prelude::*;

use crate::components::library_components::upload_form::UploadForm;

/// Upload page
#[component]
pub fn UploadPage() -> Element {
    rsx! {
        Title { "Study Space - Upload" }
        div {
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
            div {
                style: "font-size: 34px; font-weight: 500; color: #0F172A;",
                "Upload material"
            }
            div {
                style: "font-size: 17px; color: #334155; max-width: 620px;",
                "Worksheets and notes are split into pages and text blocks after upload. Videos become searchable lecture material."
            }
            UploadForm {}
        }
    }
}
