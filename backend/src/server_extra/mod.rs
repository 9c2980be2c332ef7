pub mod download_notes;
