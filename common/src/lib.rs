//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod viewer_const;
pub mod viewer_error;
pub mod geometry;
pub mod worksheet_document;
pub mod overlay_layout;
pub mod block_search;
pub mod viewer_session;
pub mod file_library;
