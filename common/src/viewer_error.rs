//! Error taxonomy of the worksheet viewer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The document could not be shown at all. Terminal for the current view.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum LoadFailure {
    #[error("failed to fetch document: {0}")]
    Fetch(String),
    #[error("document has no pages")]
    NoPages,
    #[error("page {page_index} is malformed: {reason}")]
    MalformedPage { page_index: usize, reason: String },
}

/// A block search failed. The viewer stays usable.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[error("search for \"{query}\" failed: {message}")]
pub struct SearchFailure {
    pub query: String,
    pub message: String,
}

/// A text block's geometry cannot be mapped. Only that block's region is skipped.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum GeometryInputError {
    #[error("bounding box has no points")]
    EmptyPolygon,
    #[error("bounding box is malformed: {reason}")]
    MalformedPolygon { reason: String },
    #[error("bounding box point {point_index} has a non-finite coordinate")]
    NonFiniteCoordinate { point_index: usize },
    #[error("invalid page dimensions {width}x{height}")]
    InvalidPageDimensions { width: f64, height: f64 },
}
