//! Document API routes and module exports.

pub mod get_worksheet_document;
pub mod generate_notes;
pub mod download_notes;
