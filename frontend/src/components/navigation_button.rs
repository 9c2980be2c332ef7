//! Square icon button used in title bars and page controls.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, IconShape};

pub const BUTTON_STYLE: &str = "
    min-width: 40px;
    height: 40px;
    cursor: pointer;
    border: 1px solid #000;
    border-radius: 8px;
    background: white;
    color: black;
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 6px;
    font-size: 16px;
    padding: 1px 8px;
    margin: 1px;
    text-decoration: none;
";

#[component]
pub fn NavigationButton<T: IconShape + Clone + PartialEq + 'static>(
    icon: T,
    title: String,
    label: Option<String>,
    #[props(default)] disabled: bool,
    onclick: EventHandler<()>,
) -> Element {
    let opacity = if disabled { "0.35" } else { "1" };
    rsx! {
        button {
            style: "{BUTTON_STYLE} opacity: {opacity};",
            class: "studyspace-hover-shadow-background",
            title: "{title}",
            disabled: disabled,
            onclick: move |e| {
                e.prevent_default();
                e.stop_propagation();
                if !disabled {
                    onclick.call(());
                }
            },
            Icon { icon: icon, style: "width: 22px; height: 22px;" }
            if let Some(label) = label {
                span { "{label}" }
            }
        }
    }
}
