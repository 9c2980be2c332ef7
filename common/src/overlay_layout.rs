//! Interactive regions laid over one page image.

use crate::geometry::OverlayRect;
use crate::worksheet_document::WorksheetPage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionVisualState {
    Default,
    Selected,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverlayRegion {
    /// Index of the text block within its page.
    pub block_index: usize,
    pub rect: OverlayRect,
    pub label: String,
    pub visual_state: RegionVisualState,
}

impl OverlayRegion {
    pub fn is_clickable(&self) -> bool {
        !self.rect.is_inert()
    }
}

/// One region per text block of `page`. Blocks with unusable geometry are skipped.
pub fn overlay_regions(page: &WorksheetPage, selected_block: Option<usize>) -> Vec<OverlayRegion> {
    page.text_blocks
        .iter()
        .enumerate()
        .filter_map(|(block_index, block)| {
            let rect = match block.polygon().and_then(|polygon| OverlayRect::from_bounding_box(polygon, page.dimensions)) {
                Ok(rect) => rect,
                Err(e) => {
                    tracing::warn!("skipping text block {block_index}: {e}");
                    return None;
                }
            };
            let visual_state = if selected_block == Some(block_index) {
                RegionVisualState::Selected
            } else {
                RegionVisualState::Default
            };
            Some(OverlayRegion { block_index, rect, label: block.text.clone(), visual_state })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{PageDimensions, PixelPoint};
    use crate::worksheet_document::TextBlock;

    fn block(points: &[(f64, f64)], text: &str) -> TextBlock {
        TextBlock::new(points.iter().copied().map(PixelPoint::from).collect(), text)
    }

    fn page() -> WorksheetPage {
        WorksheetPage {
            image: String::new(),
            dimensions: PageDimensions::new(100.0, 100.0),
            text_blocks: vec![
                block(&[(10.0, 10.0), (50.0, 10.0), (50.0, 40.0), (10.0, 40.0)], "1."),
                block(&[], "broken"),
                block(&[(70.0, 70.0); 4], "dot"),
                block(&[(20.0, 60.0), (80.0, 60.0), (80.0, 90.0), (20.0, 90.0)], "2."),
            ],
        }
    }

    #[test]
    fn skips_only_malformed_blocks_and_keeps_indices() {
        let regions = overlay_regions(&page(), None);
        let indices: Vec<_> = regions.iter().map(|r| r.block_index).collect();
        assert_eq!(indices, vec![0, 2, 3]);
        assert_eq!(regions[0].rect, OverlayRect { left_pct: 0.0, top_pct: 0.0, width_pct: 60.0, height_pct: 50.0 });
    }

    #[test]
    fn marks_selected_block() {
        let regions = overlay_regions(&page(), Some(3));
        let selected: Vec<_> = regions.iter().filter(|r| r.visual_state == RegionVisualState::Selected).map(|r| r.block_index).collect();
        assert_eq!(selected, vec![3]);
    }

    #[test]
    fn unparseable_block_from_json_is_skipped() {
        let page: WorksheetPage = serde_json::from_str(
            r#"{
                "image": "abc",
                "dimensions": [100, 100],
                "text_blocks": [
                    { "bounding_box": [[10,10],[50,10],[50,40],[10,40]], "text": "1." },
                    { "bounding_box": [[10,"x"]], "text": "2." }
                ]
            }"#,
        )
        .unwrap();
        let regions = overlay_regions(&page, None);
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].block_index, 0);
        assert_eq!(regions[0].label, "1.");
    }

    #[test]
    fn degenerate_block_is_not_clickable() {
        let regions = overlay_regions(&page(), None);
        let dot = regions.iter().find(|r| r.block_index == 2).unwrap();
        assert!(!dot.is_clickable());
        assert!(regions[0].is_clickable());
    }
}
