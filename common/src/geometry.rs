//! Maps text block polygons from page pixel space onto relative overlay rectangles.

use serde::{Deserialize, Serialize};

use crate::viewer_const::BOUNDING_BOX_PADDING_PX;
use crate::viewer_error::GeometryInputError;

/// One polygon vertex, in the pixel space of the owning page.
///
/// Serialized as a `[x, y]` pair, which is how the extraction pipeline sends it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for PixelPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<PixelPoint> for (f64, f64) {
    fn from(p: PixelPoint) -> Self {
        (p.x, p.y)
    }
}

/// Native pixel size of a page image. Serialized as `[width, height]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct PageDimensions {
    pub width: f64,
    pub height: f64,
}

impl PageDimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn validate(&self) -> Result<(), GeometryInputError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if valid(self.width) && valid(self.height) {
            Ok(())
        } else {
            Err(GeometryInputError::InvalidPageDimensions { width: self.width, height: self.height })
        }
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }
}

impl From<(f64, f64)> for PageDimensions {
    fn from((width, height): (f64, f64)) -> Self {
        Self { width, height }
    }
}

impl From<PageDimensions> for (f64, f64) {
    fn from(d: PageDimensions) -> Self {
        (d.width, d.height)
    }
}

/// Axis-aligned pixel bounds of a polygon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelBounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl PixelBounds {
    pub fn of_polygon(polygon: &[PixelPoint]) -> Result<Self, GeometryInputError> {
        let Some(first) = polygon.first() else {
            return Err(GeometryInputError::EmptyPolygon);
        };
        let mut bounds = PixelBounds { min_x: first.x, min_y: first.y, max_x: first.x, max_y: first.y };
        for (point_index, point) in polygon.iter().enumerate() {
            if !point.x.is_finite() || !point.y.is_finite() {
                return Err(GeometryInputError::NonFiniteCoordinate { point_index });
            }
            bounds.min_x = bounds.min_x.min(point.x);
            bounds.min_y = bounds.min_y.min(point.y);
            bounds.max_x = bounds.max_x.max(point.x);
            bounds.max_y = bounds.max_y.max(point.y);
        }
        Ok(bounds)
    }

    pub fn is_single_point(&self) -> bool {
        self.min_x == self.max_x && self.min_y == self.max_y
    }

    pub fn padded(&self, padding: f64) -> Self {
        PixelBounds {
            min_x: self.min_x - padding,
            min_y: self.min_y - padding,
            max_x: self.max_x + padding,
            max_y: self.max_y + padding,
        }
    }
}

/// Overlay rectangle in percent of the page's native size.
///
/// Values are not clamped: padding near an edge may give `left < 0` or
/// `left + width > 100`, and the overlay then overflows the image slightly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlayRect {
    pub left_pct: f64,
    pub top_pct: f64,
    pub width_pct: f64,
    pub height_pct: f64,
}

impl OverlayRect {
    /// Maps a text block polygon onto the page, padding it by
    /// [`BOUNDING_BOX_PADDING_PX`] on every side.
    ///
    /// A polygon whose points all coincide is left unpadded and maps to a
    /// zero-area rectangle at that point (see [`OverlayRect::is_inert`]).
    pub fn from_bounding_box(polygon: &[PixelPoint], dimensions: PageDimensions) -> Result<Self, GeometryInputError> {
        dimensions.validate()?;
        let bounds = PixelBounds::of_polygon(polygon)?;
        let bounds = if bounds.is_single_point() { bounds } else { bounds.padded(BOUNDING_BOX_PADDING_PX) };
        Ok(Self::from_pixel_bounds(bounds, dimensions))
    }

    fn from_pixel_bounds(bounds: PixelBounds, dimensions: PageDimensions) -> Self {
        let pct_x = |v: f64| v * 100.0 / dimensions.width;
        let pct_y = |v: f64| v * 100.0 / dimensions.height;
        OverlayRect {
            left_pct: pct_x(bounds.min_x),
            top_pct: pct_y(bounds.min_y),
            width_pct: pct_x(bounds.max_x - bounds.min_x),
            height_pct: pct_y(bounds.max_y - bounds.min_y),
        }
    }

    pub fn is_inert(&self) -> bool {
        self.width_pct == 0.0 && self.height_pct == 0.0
    }

    /// Inline CSS placing the rectangle over a `position: relative` image container.
    pub fn css_position(&self) -> String {
        format!(
            "position: absolute; left: {}%; top: {}%; width: {}%; height: {}%;",
            self.left_pct, self.top_pct, self.width_pct, self.height_pct
        )
    }
}
