//! Constants shared by the viewer and the API client.

/// Outward padding added on every side of a text block before mapping it onto the page.
pub const BOUNDING_BOX_PADDING_PX: f64 = 10.0;

pub const DEFAULT_API_URL: &str = "http://localhost:5000";
pub const DEFAULT_SEARCH_TIMEOUT_SECS: u64 = 20;
pub const DEFAULT_DOCUMENT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_UPLOAD_TIMEOUT_SECS: u64 = 300;
