//! Server functions wrapping the Study Space API client.

pub mod files_api;
pub mod worksheet_api;
