use dioxus::prelude::*;

use crate::components::suspend_boundary::SuspendWrapper;
use crate::components::worksheet_components::viewer_shell::WorksheetViewerRoot;

/// Interactive worksheet viewer page
#[component]
pub fn ViewWorksheetPage(file_id: String) -> Element {
    rsx! {
        Title { "Study Space - Worksheet" }
        SuspendWrapper {
            WorksheetViewerRoot { file_id }
        }
    }
}
