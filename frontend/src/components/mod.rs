pub mod error_boundary;
pub mod library_components;
pub mod navbar;
pub mod navigation_button;
pub mod suspend_boundary;
pub mod worksheet_components;
