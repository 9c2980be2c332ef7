//! Study Space API operations, grouped by resource.

pub mod documents;
pub mod search;
pub mod files;
