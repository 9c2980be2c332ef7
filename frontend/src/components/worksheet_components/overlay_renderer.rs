//! Page image with one clickable box per text block.

use common::overlay_layout::{OverlayRegion, RegionVisualState};
use dioxus::prelude::*;

use crate::data_definitions::viewer_control::ViewerControl;

#[component]
pub fn PageOverlayCanvas() -> Element {
    let control = use_context::<ViewerControl>();
    let session = control.session;

    // The data URL is only rebuilt when a different page or a reloaded document is shown.
    let shown_page = use_memo(move || session.read().shown_page_key());
    let page_image = use_memo(move || {
        let (_, page_index) = shown_page()?;
        let session = session.peek();
        let page = session.current_page()?;
        Some((page_index, page.image_data_url(), page.dimensions))
    });

    let Some((page_index, image_src, dimensions)) = page_image() else {
        return rsx! {};
    };
    let regions = session.read().overlay_regions();

    rsx! {
        div {
            id: "x-worksheet-page",
            style: "
                position: relative;
                width: 100%;
                aspect-ratio: {dimensions.width} / {dimensions.height};
                flex-shrink: 0;
                background: white;
                box-shadow: 0 2px 8px rgba(0, 0, 0, 0.15);
            ",
            img {
                src: "{image_src}",
                alt: "Worksheet page {page_index + 1}",
                draggable: "false",
                style: "position: absolute; left: 0; top: 0; width: 100%; height: 100%; display: block; user-select: none;",
            }
            for region in regions {
                OverlayRegionBox { key: "{page_index}-{region.block_index}", region: region.clone() }
            }
        }
    }
}

#[component]
fn OverlayRegionBox(region: OverlayRegion) -> Element {
    let control = use_context::<ViewerControl>();
    let block_index = region.block_index;
    let clickable = region.is_clickable();
    let (border, background) = match region.visual_state {
        RegionVisualState::Selected => ("2px solid #4F46E5", "rgba(79, 70, 229, 0.22)"),
        RegionVisualState::Default => ("1px dashed rgba(79, 70, 229, 0.45)", "transparent"),
    };
    let pointer = if clickable { "cursor: pointer;" } else { "pointer-events: none;" };

    rsx! {
        div {
            class: "studyspace-overlay-region",
            title: "{region.label}",
            style: "{region.rect.css_position()} border: {border}; background-color: {background}; border-radius: 3px; {pointer}",
            onclick: move |e| {
                e.stop_propagation();
                if clickable {
                    control.select_block.call(block_index);
                }
            },
        }
    }
}
