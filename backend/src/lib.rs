//! Server-side client for the Study Space API.

pub mod config;
pub mod api;
pub mod api_utils;
pub mod server_extra;
