//! State owned by the worksheet viewer shell for one viewing session.

use crate::block_search::{BlockSearchController, SearchTicket};
use crate::overlay_layout::{OverlayRegion, overlay_regions};
use crate::viewer_error::LoadFailure;
use crate::worksheet_document::{WorksheetDocument, WorksheetDocumentResponse, WorksheetPage};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DocumentLoadState {
    #[default]
    NotStarted,
    Loading { file_id: String },
    Loaded(WorksheetDocument),
    Failed { file_id: String, error: LoadFailure },
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadTicket {
    pub token: u64,
    pub file_id: String,
}

/// Document, current page and block search state of the viewer.
///
/// Every page change resets the search controller, since block indices only
/// mean something within one page.
#[derive(Debug, Clone, Default)]
pub struct ViewerSession {
    load_state: DocumentLoadState,
    load_token: u64,
    current_page_index: usize,
    search: BlockSearchController,
}

impl ViewerSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops whatever was shown before and starts loading `file_id`.
    pub fn begin_load(&mut self, file_id: impl Into<String>) -> LoadTicket {
        let file_id = file_id.into();
        self.load_token += 1;
        self.load_state = DocumentLoadState::Loading { file_id: file_id.clone() };
        self.current_page_index = 0;
        self.search.reset();
        LoadTicket { token: self.load_token, file_id }
    }

    /// Installs a fetched document. Returns `false` if a newer load has started since.
    pub fn finish_load(&mut self, ticket: &LoadTicket, outcome: Result<WorksheetDocumentResponse, String>) -> bool {
        if ticket.token != self.load_token {
            tracing::debug!("dropping stale document load for {}", ticket.file_id);
            return false;
        }
        let loaded = outcome
            .map_err(LoadFailure::Fetch)
            .and_then(|response| WorksheetDocument::from_response(ticket.file_id.clone(), response));
        self.load_state = match loaded {
            Ok(document) => {
                tracing::info!("loaded {} ({} pages)", document.file_name(), document.page_count());
                DocumentLoadState::Loaded(document)
            }
            Err(error) => {
                tracing::error!("failed to load {}: {error}", ticket.file_id);
                DocumentLoadState::Failed { file_id: ticket.file_id.clone(), error }
            }
        };
        self.current_page_index = 0;
        self.search.reset();
        true
    }

    pub fn load_state(&self) -> &DocumentLoadState {
        &self.load_state
    }

    pub fn document(&self) -> Option<&WorksheetDocument> {
        match &self.load_state {
            DocumentLoadState::Loaded(document) => Some(document),
            _ => None,
        }
    }

    pub fn page_count(&self) -> usize {
        self.document().map(WorksheetDocument::page_count).unwrap_or(0)
    }

    pub fn current_page_index(&self) -> usize {
        self.current_page_index
    }

    pub fn current_page(&self) -> Option<&WorksheetPage> {
        self.document().and_then(|document| document.page(self.current_page_index))
    }

    /// Identifies the page on screen: the load it came from and its index.
    /// Unchanged by block selection and search responses.
    pub fn shown_page_key(&self) -> Option<(u64, usize)> {
        self.current_page().map(|_| (self.load_token, self.current_page_index))
    }

    pub fn can_go_to_previous_page(&self) -> bool {
        self.document().is_some() && self.current_page_index > 0
    }

    pub fn can_go_to_next_page(&self) -> bool {
        self.current_page_index + 1 < self.page_count()
    }

    /// No-op on the first page. Returns whether the page changed.
    pub fn go_to_previous_page(&mut self) -> bool {
        if !self.can_go_to_previous_page() {
            return false;
        }
        self.set_page(self.current_page_index - 1);
        true
    }

    /// No-op on the last page. Returns whether the page changed.
    pub fn go_to_next_page(&mut self) -> bool {
        if !self.can_go_to_next_page() {
            return false;
        }
        self.set_page(self.current_page_index + 1);
        true
    }

    fn set_page(&mut self, page_index: usize) {
        self.current_page_index = page_index;
        self.search.reset();
    }

    pub fn search(&self) -> &BlockSearchController {
        &self.search
    }

    /// Selects block `block_index` of the current page. `None` if there is no such block.
    pub fn select_block(&mut self, block_index: usize) -> Option<SearchTicket> {
        let document = match &self.load_state {
            DocumentLoadState::Loaded(document) => document,
            _ => return None,
        };
        let block = document.page(self.current_page_index)?.block(block_index)?;
        Some(self.search.select(block_index, block.text.clone(), document.file_id()))
    }

    pub fn complete_search(&mut self, ticket: &SearchTicket, outcome: Result<serde_json::Value, String>) -> bool {
        self.search.complete(ticket, outcome)
    }

    pub fn overlay_regions(&self) -> Vec<OverlayRegion> {
        match self.current_page() {
            Some(page) => overlay_regions(page, self.search.selected_block()),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::block_search::BlockSearchState;

    fn response(page_count: usize) -> WorksheetDocumentResponse {
        let pages: Vec<_> = (0..page_count)
            .map(|i| {
                json!({
                    "image": "iVBORw0KGgo=",
                    "dimensions": [100, 100],
                    "text_blocks": [
                        { "bounding_box": [[10, 10], [50, 10], [50, 40], [10, 40]], "text": format!("page {i} problem 1") },
                        { "bounding_box": [[10, 60], [50, 60], [50, 90], [10, 90]], "text": format!("page {i} problem 2") }
                    ]
                })
            })
            .collect();
        serde_json::from_value(json!({ "file_name": "worksheet.pdf", "pages": pages })).unwrap()
    }

    fn loaded(page_count: usize) -> ViewerSession {
        let mut session = ViewerSession::new();
        let ticket = session.begin_load("file-1");
        assert!(session.finish_load(&ticket, Ok(response(page_count))));
        session
    }

    #[test]
    fn load_starts_at_first_page() {
        let session = loaded(3);
        assert_eq!(session.current_page_index(), 0);
        assert_eq!(session.page_count(), 3);
        assert_eq!(session.overlay_regions().len(), 2);
    }

    #[test]
    fn shown_page_key_ignores_selection_and_tracks_reloads() {
        let mut session = loaded(2);
        let first = session.shown_page_key();
        assert!(first.is_some());
        let ticket = session.select_block(1).unwrap();
        session.complete_search(&ticket, Ok(json!([])));
        assert_eq!(session.shown_page_key(), first);

        session.go_to_next_page();
        let second = session.shown_page_key();
        assert_ne!(second, first);

        let reload = session.begin_load("file-1");
        assert_eq!(session.shown_page_key(), None);
        session.finish_load(&reload, Ok(response(2)));
        assert!(session.shown_page_key().is_some());
        assert_ne!(session.shown_page_key(), first);
    }

    #[test]
    fn failed_fetch_is_terminal() {
        let mut session = ViewerSession::new();
        let ticket = session.begin_load("file-1");
        session.finish_load(&ticket, Err("503".into()));
        assert!(matches!(session.load_state(), DocumentLoadState::Failed { error: LoadFailure::Fetch(_), .. }));
        assert!(session.current_page().is_none());
        assert!(session.select_block(0).is_none());
        assert!(!session.go_to_next_page());
    }

    #[test]
    fn empty_document_is_a_load_failure() {
        let mut session = ViewerSession::new();
        let ticket = session.begin_load("file-1");
        session.finish_load(&ticket, Ok(response(0)));
        assert!(matches!(session.load_state(), DocumentLoadState::Failed { error: LoadFailure::NoPages, .. }));
    }

    #[test]
    fn new_load_hides_previous_document_and_ignores_stale_response() {
        let mut session = loaded(2);
        let old_ticket = session.begin_load("file-2");
        assert!(session.document().is_none());
        let new_ticket = session.begin_load("file-3");
        assert!(!session.finish_load(&old_ticket, Ok(response(5))));
        assert!(matches!(session.load_state(), DocumentLoadState::Loading { .. }));
        assert!(session.finish_load(&new_ticket, Ok(response(1))));
        assert_eq!(session.document().map(|d| d.file_id()), Some("file-3"));
    }

    #[test]
    fn next_page_always_clears_selection() {
        let mut session = loaded(3);
        session.select_block(1).unwrap();
        assert!(session.go_to_next_page());
        assert_eq!(session.search().state(), &BlockSearchState::Idle);

        let ticket = session.select_block(0).unwrap();
        session.complete_search(&ticket, Ok(json!("r")));
        assert!(session.go_to_next_page());
        assert_eq!(session.search().state(), &BlockSearchState::Idle);
        assert!(session.search().last_result().is_none());
    }

    #[test]
    fn response_for_previous_page_is_dropped() {
        let mut session = loaded(2);
        let ticket = session.select_block(0).unwrap();
        session.go_to_next_page();
        assert!(!session.complete_search(&ticket, Ok(json!("late"))));
        assert_eq!(session.search().state(), &BlockSearchState::Idle);
    }

    #[test]
    fn navigation_at_bounds_is_a_noop_and_keeps_selection() {
        let mut session = loaded(2);
        session.select_block(1).unwrap();
        assert!(!session.go_to_previous_page());
        assert_eq!(session.search().selected_block(), Some(1));

        session.go_to_next_page();
        session.select_block(0).unwrap();
        assert!(!session.go_to_next_page());
        assert_eq!(session.current_page_index(), 1);
        assert_eq!(session.search().selected_block(), Some(0));
    }

    #[test]
    fn select_uses_block_text_and_file_id() {
        let mut session = loaded(2);
        session.go_to_next_page();
        let ticket = session.select_block(1).unwrap();
        assert_eq!(ticket.request.query, "page 1 problem 2");
        assert_eq!(ticket.request.file_id, "file-1");
        assert!(session.select_block(2).is_none());
    }
}
