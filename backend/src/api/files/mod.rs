//! File library API: listing and uploads.

pub mod list_files;
pub mod upload_file;
