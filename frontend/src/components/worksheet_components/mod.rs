//! Worksheet viewer: page image, block overlays and the results panel.

pub mod load_failure_view;
pub mod overlay_renderer;
pub mod page_controls;
pub mod results_panel;
pub mod viewer_shell;
pub mod worksheet_title_bar;
