//! Side navigation bar wrapping every page.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::MdHome;
use dioxus_free_icons::icons::md_file_icons::{MdFileUpload, MdFolder};
use dioxus_free_icons::{Icon, IconShape};

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::routes::Route;

#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            id: "x-nav-container",
            style: "
                display: flex;
                flex-direction: row;
                width: 100%;
                height: 100%;
            ",

            div {
                id: "x-nav-sidebar",
                style: "
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 40px;
                    width: 70px;
                    height: 100%;
                    background-color: #1C212D;
                    border: 1px solid #000000;
                    padding: 16px 0;
                    flex-shrink: 0;
                ",

                NavbarLogo {}
                div {
                    style: "
                        display: flex;
                        flex-direction: column;
                        gap: 24px;
                        align-items: center;
                    ",
                    IconLink { to: Route::HomePage {}, icon: MdHome, label: "Home" }
                    IconLink { to: Route::library_page(None), icon: MdFolder, label: "Library" }
                    IconLink { to: Route::UploadPage {}, icon: MdFileUpload, label: "Upload" }
                }
            }

            div {
                id: "x-page-container",
                style: "flex-grow: 1; min-width: 100px; height: 100%; overflow: hidden;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn NavbarLogo() -> Element {
    rsx! {
        Link {
            to: Route::HomePage {},
            style: "
                width: 38px;
                height: 38px;
                border-radius: 10px;
                background: linear-gradient(135deg, #2D208A 0%, #5B3DF5 100%);
                color: white;
                font-weight: 700;
                font-size: 18px;
                display: flex;
                align-items: center;
                justify-content: center;
                text-decoration: none;
            ",
            "S"
        }
    }
}

#[component]
fn IconLink<T: IconShape + Clone + PartialEq + 'static>(to: Route, icon: T, label: String) -> Element {
    rsx! {
        Link {
            to: to,
            title: "{label}",
            span {
                style: "color: white;",
                Icon { icon: icon, style: "width: 26px; height: 26px;" }
            }
        }
    }
}
