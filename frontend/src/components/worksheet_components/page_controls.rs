use dioxus::prelude::*;
use dioxus_free_icons::icons::md_navigation_icons::{MdArrowBack, MdArrowForward};

use crate::components::navigation_button::NavigationButton;
use crate::data_definitions::viewer_control::ViewerControl;

/// Previous / next buttons and the "Page i of n" indicator.
#[component]
pub fn PageControls() -> Element {
    let control = use_context::<ViewerControl>();
    let (page_index, page_count, can_go_back, can_go_forward) = {
        let session = control.session.read();
        (
            session.current_page_index(),
            session.page_count(),
            session.can_go_to_previous_page(),
            session.can_go_to_next_page(),
        )
    };

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                justify-content: center;
                gap: 16px;
                flex-shrink: 0;
            ",
            NavigationButton {
                icon: MdArrowBack,
                title: "Previous page",
                disabled: !can_go_back,
                onclick: move |_: ()| control.go_to_previous_page.call(()),
            }
            div {
                style: "font-size: 18px; color: #0F172A; min-width: 120px; text-align: center;",
                "Page {page_index + 1} of {page_count}"
            }
            NavigationButton {
                icon: MdArrowForward,
                title: "Next page",
                disabled: !can_go_forward,
                onclick: move |_: ()| control.go_to_next_page.call(()),
            }
        }
    }
}
