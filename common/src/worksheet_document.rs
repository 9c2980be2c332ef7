//! Worksheet document model: the fetched pages of one uploaded file and page lookup.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use crate::geometry::{PageDimensions, PixelPoint};
use crate::viewer_error::{GeometryInputError, LoadFailure};

/// One detected span of text on a page. Produced upstream, never mutated here.
///
/// An outline that does not parse as a list of `[x, y]` number pairs is kept
/// as a [`GeometryInputError`] so that only this block loses its region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "TextBlockWire")]
pub struct TextBlock {
    pub bounding_box: Vec<PixelPoint>,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometry_error: Option<GeometryInputError>,
}

#[derive(Deserialize)]
struct TextBlockWire {
    #[serde(default)]
    bounding_box: serde_json::Value,
    #[serde(default)]
    text: String,
    #[serde(default)]
    geometry_error: Option<GeometryInputError>,
}

impl From<TextBlockWire> for TextBlock {
    fn from(wire: TextBlockWire) -> Self {
        let parsed = match wire.geometry_error {
            Some(e) => Err(e),
            None => serde_json::from_value::<Vec<PixelPoint>>(wire.bounding_box)
                .map_err(|e| GeometryInputError::MalformedPolygon { reason: e.to_string() }),
        };
        match parsed {
            Ok(bounding_box) => TextBlock { bounding_box, text: wire.text, geometry_error: None },
            Err(e) => TextBlock { bounding_box: Vec::new(), text: wire.text, geometry_error: Some(e) },
        }
    }
}

impl TextBlock {
    pub fn new(bounding_box: Vec<PixelPoint>, text: impl Into<String>) -> Self {
        TextBlock { bounding_box, text: text.into(), geometry_error: None }
    }

    /// The outline points, or the reason they could not be read.
    pub fn polygon(&self) -> Result<&[PixelPoint], GeometryInputError> {
        match &self.geometry_error {
            Some(e) => Err(e.clone()),
            None => Ok(&self.bounding_box),
        }
    }
}

/// A scanned page: base64 image, its native pixel size, and its text blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WorksheetPageWire")]
pub struct WorksheetPage {
    pub image: String,
    pub dimensions: PageDimensions,
    pub text_blocks: Vec<TextBlock>,
}

#[derive(Deserialize)]
struct PageLayoutWire {
    dimensions: PageDimensions,
    #[serde(default)]
    text_blocks: Vec<TextBlock>,
}

// Older extraction output nests the layout under a `pages` key.
#[derive(Deserialize)]
struct WorksheetPageWire {
    image: String,
    dimensions: Option<PageDimensions>,
    text_blocks: Option<Vec<TextBlock>>,
    pages: Option<PageLayoutWire>,
}

impl TryFrom<WorksheetPageWire> for WorksheetPage {
    type Error = String;

    fn try_from(wire: WorksheetPageWire) -> Result<Self, Self::Error> {
        let (dimensions, text_blocks) = match (wire.dimensions, wire.pages) {
            (Some(dimensions), _) => (dimensions, wire.text_blocks.unwrap_or_default()),
            (None, Some(layout)) => (layout.dimensions, layout.text_blocks),
            (None, None) => return Err("page has no dimensions".to_string()),
        };
        Ok(WorksheetPage { image: wire.image, dimensions, text_blocks })
    }
}

impl WorksheetPage {
    pub fn block(&self, index: usize) -> Option<&TextBlock> {
        self.text_blocks.get(index)
    }

    /// The page image as a `data:` URL, with the MIME type read from the image header.
    pub fn image_data_url(&self) -> String {
        if self.image.starts_with("data:") {
            return self.image.clone();
        }
        format!("data:{};base64,{}", sniff_image_mime(&self.image), self.image)
    }
}

fn sniff_image_mime(image_base64: &str) -> &'static str {
    // 16 base64 chars decode to exactly 12 bytes, enough for every signature below
    let prefix: String = image_base64.chars().filter(|c| !c.is_whitespace()).take(16).collect();
    let Ok(header) = STANDARD.decode(prefix.as_bytes()) else {
        return "image/png";
    };
    match header.as_slice() {
        [0x89, b'P', b'N', b'G', ..] => "image/png",
        [0xFF, 0xD8, 0xFF, ..] => "image/jpeg",
        [b'G', b'I', b'F', b'8', ..] => "image/gif",
        [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => "image/webp",
        _ => "image/png",
    }
}

/// Body of the document fetch endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorksheetDocumentResponse {
    #[serde(default)]
    pub id: Option<String>,
    pub file_name: String,
    #[serde(default)]
    pub file_type: Option<String>,
    #[serde(default)]
    pub pages: Vec<WorksheetPage>,
}

/// A validated, immutable worksheet.
///
/// Page indices are refused rather than clamped when out of range.
#[derive(Debug, Clone, PartialEq)]
pub struct WorksheetDocument {
    file_id: String,
    file_name: String,
    pages: Vec<WorksheetPage>,
}

impl WorksheetDocument {
    pub fn from_response(file_id: impl Into<String>, response: WorksheetDocumentResponse) -> Result<Self, LoadFailure> {
        if response.pages.is_empty() {
            return Err(LoadFailure::NoPages);
        }
        for (page_index, page) in response.pages.iter().enumerate() {
            if page.image.trim().is_empty() {
                return Err(LoadFailure::MalformedPage { page_index, reason: "empty image".to_string() });
            }
            page.dimensions
                .validate()
                .map_err(|e| LoadFailure::MalformedPage { page_index, reason: e.to_string() })?;
        }
        Ok(WorksheetDocument {
            file_id: file_id.into(),
            file_name: response.file_name,
            pages: response.pages,
        })
    }

    pub fn file_id(&self) -> &str {
        &self.file_id
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn pages(&self) -> &[WorksheetPage] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn page(&self, index: usize) -> Option<&WorksheetPage> {
        self.pages.get(index)
    }

    /// Same as [`WorksheetDocument::page`] for signed indices; negatives are refused.
    pub fn page_checked(&self, index: i64) -> Option<&WorksheetPage> {
        usize::try_from(index).ok().and_then(|i| self.page(i))
    }
}
