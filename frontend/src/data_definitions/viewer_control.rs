//! Context handed from the worksheet viewer shell to its child components.

use common::viewer_session::ViewerSession;
use dioxus::prelude::*;

/// Read access to the session plus the only ways children may change it.
#[derive(Debug, Clone, PartialEq, Copy)]
pub struct ViewerControl {
    pub session: ReadSignal<ViewerSession>,
    pub select_block: Callback<usize>,
    pub go_to_previous_page: Callback<()>,
    pub go_to_next_page: Callback<()>,
    pub retry_load: Callback<()>,
}
