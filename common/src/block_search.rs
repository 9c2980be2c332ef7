//! Block selection and search state machine.
//!
//! Every click issues a [`SearchTicket`] with a fresh token. A response only
//! changes state when its ticket still carries the current token, so the most
//! recent click always wins regardless of the order responses arrive in.

use serde::{Deserialize, Serialize};

use crate::viewer_error::SearchFailure;

/// Body of the search endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockSearchRequest {
    pub query: String,
    pub file_id: String,
}

/// Backend search payload, kept verbatim together with the query that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockSearchResult {
    pub query: String,
    pub payload: serde_json::Value,
}

impl BlockSearchResult {
    pub fn is_empty(&self) -> bool {
        match &self.payload {
            serde_json::Value::Null => true,
            serde_json::Value::Array(items) => items.is_empty(),
            serde_json::Value::Object(fields) => fields.is_empty(),
            _ => false,
        }
    }

    pub fn to_pretty_string(&self) -> String {
        serde_json::to_string_pretty(&self.payload).unwrap_or_else(|_| self.payload.to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchTicket {
    pub token: u64,
    pub block_index: usize,
    pub request: BlockSearchRequest,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedBlock {
    pub block_index: usize,
    pub result: BlockSearchResult,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum BlockSearchState {
    #[default]
    Idle,
    Selected { block_index: usize, token: u64 },
    Resolved { block_index: usize, result: BlockSearchResult },
    Failed { block_index: usize, error: SearchFailure },
}

impl BlockSearchState {
    pub fn selected_block(&self) -> Option<usize> {
        match self {
            BlockSearchState::Idle => None,
            BlockSearchState::Selected { block_index, .. }
            | BlockSearchState::Resolved { block_index, .. }
            | BlockSearchState::Failed { block_index, .. } => Some(*block_index),
        }
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self, BlockSearchState::Selected { .. })
    }
}

/// What the results panel should show.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResultsPanelView<'a> {
    NothingSelected,
    Searching { block_index: usize, stale: Option<&'a ResolvedBlock> },
    Ready(&'a ResolvedBlock),
    Failed { error: &'a SearchFailure, stale: Option<&'a ResolvedBlock> },
}

#[derive(Debug, Clone, Default)]
pub struct BlockSearchController {
    state: BlockSearchState,
    next_token: u64,
    last_result: Option<ResolvedBlock>,
}

impl BlockSearchController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &BlockSearchState {
        &self.state
    }

    pub fn selected_block(&self) -> Option<usize> {
        self.state.selected_block()
    }

    /// Most recent successful result of this page, kept across later failures.
    pub fn last_result(&self) -> Option<&ResolvedBlock> {
        self.last_result.as_ref()
    }

    /// Selects `block_index` immediately and returns the ticket for the request to issue.
    pub fn select(&mut self, block_index: usize, query: impl Into<String>, file_id: impl Into<String>) -> SearchTicket {
        self.next_token += 1;
        let token = self.next_token;
        if let BlockSearchState::Selected { token: superseded, .. } = self.state {
            tracing::debug!("search {superseded} superseded by {token}");
        }
        self.state = BlockSearchState::Selected { block_index, token };
        SearchTicket {
            token,
            block_index,
            request: BlockSearchRequest { query: query.into(), file_id: file_id.into() },
        }
    }

    pub fn is_current(&self, ticket: &SearchTicket) -> bool {
        matches!(self.state, BlockSearchState::Selected { token, .. } if token == ticket.token)
    }

    /// Applies a search response. Returns `false` when the ticket was superseded
    /// (by a newer click or a reset) and the response was dropped.
    pub fn complete(&mut self, ticket: &SearchTicket, outcome: Result<serde_json::Value, String>) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!("dropping stale search response for block {} (token {})", ticket.block_index, ticket.token);
            return false;
        }
        let block_index = ticket.block_index;
        self.state = match outcome {
            Ok(payload) => {
                let result = BlockSearchResult { query: ticket.request.query.clone(), payload };
                self.last_result = Some(ResolvedBlock { block_index, result: result.clone() });
                BlockSearchState::Resolved { block_index, result }
            }
            Err(message) => BlockSearchState::Failed {
                block_index,
                error: SearchFailure { query: ticket.request.query.clone(), message },
            },
        };
        true
    }

    /// Back to `Idle`; every outstanding ticket becomes stale.
    pub fn reset(&mut self) {
        self.state = BlockSearchState::Idle;
        self.last_result = None;
    }

    pub fn panel_view(&self) -> ResultsPanelView<'_> {
        let last_result = self.last_result.as_ref();
        let stale_for = move |block_index: usize| last_result.filter(|r| r.block_index != block_index);
        match &self.state {
            BlockSearchState::Idle => ResultsPanelView::NothingSelected,
            BlockSearchState::Selected { block_index, .. } => {
                ResultsPanelView::Searching { block_index: *block_index, stale: stale_for(*block_index) }
            }
            BlockSearchState::Resolved { .. } => match last_result {
                Some(resolved) => ResultsPanelView::Ready(resolved),
                None => ResultsPanelView::NothingSelected,
            },
            BlockSearchState::Failed { block_index, error } => {
                ResultsPanelView::Failed { error, stale: stale_for(*block_index) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn resolved_payload(controller: &BlockSearchController) -> Option<serde_json::Value> {
        match controller.state() {
            BlockSearchState::Resolved { result, .. } => Some(result.payload.clone()),
            _ => None,
        }
    }

    #[test]
    fn click_selects_synchronously() {
        let mut controller = BlockSearchController::new();
        let ticket = controller.select(2, "x^2 = 4", "file1");
        assert_eq!(controller.selected_block(), Some(2));
        assert!(controller.state().is_in_flight());
        assert_eq!(ticket.request, BlockSearchRequest { query: "x^2 = 4".into(), file_id: "file1".into() });
    }

    #[test]
    fn resolves_current_ticket() {
        let mut controller = BlockSearchController::new();
        let ticket = controller.select(0, "q", "f");
        assert!(controller.complete(&ticket, Ok(json!({"videos": []}))));
        assert_eq!(resolved_payload(&controller), Some(json!({"videos": []})));
        assert_eq!(controller.last_result().map(|r| r.block_index), Some(0));
    }

    #[test]
    fn latest_click_wins_in_either_arrival_order() {
        for i_first in [true, false] {
            let mut controller = BlockSearchController::new();
            let ticket_i = controller.select(1, "block i", "f");
            let ticket_j = controller.select(4, "block j", "f");
            let mut deliver = |ticket: &SearchTicket, name: &str| controller.complete(ticket, Ok(json!(name)));
            if i_first {
                assert!(!deliver(&ticket_i, "i"));
                assert!(deliver(&ticket_j, "j"));
            } else {
                assert!(deliver(&ticket_j, "j"));
                assert!(!deliver(&ticket_i, "i"));
            }
            assert_eq!(resolved_payload(&controller), Some(json!("j")));
            assert_eq!(controller.selected_block(), Some(4));
        }
    }

    #[test]
    fn n_clicks_issue_n_tickets_and_surface_only_the_last() {
        let mut controller = BlockSearchController::new();
        let tickets: Vec<_> = (0..5).map(|i| controller.select(i, format!("q{i}"), "f")).collect();
        let mut tokens: Vec<_> = tickets.iter().map(|t| t.token).collect();
        tokens.dedup();
        assert_eq!(tokens.len(), 5);
        let applied: Vec<_> = tickets.iter().rev().map(|t| controller.complete(t, Ok(json!(t.block_index)))).collect();
        assert_eq!(applied, vec![true, false, false, false, false]);
        assert_eq!(resolved_payload(&controller), Some(json!(4)));
    }

    #[test]
    fn failure_is_recorded_and_keeps_previous_result() {
        let mut controller = BlockSearchController::new();
        let first = controller.select(0, "q0", "f");
        controller.complete(&first, Ok(json!(["segment"])));
        let second = controller.select(3, "q3", "f");
        assert!(controller.complete(&second, Err("timeout".into())));
        match controller.state() {
            BlockSearchState::Failed { block_index, error } => {
                assert_eq!(*block_index, 3);
                assert_eq!(error.query, "q3");
            }
            other => panic!("unexpected state {other:?}"),
        }
        assert_eq!(controller.last_result().map(|r| r.block_index), Some(0));
        assert!(matches!(controller.panel_view(), ResultsPanelView::Failed { stale: Some(_), .. }));
    }

    #[test]
    fn reset_drops_outstanding_responses() {
        let mut controller = BlockSearchController::new();
        let ticket = controller.select(0, "q", "f");
        controller.reset();
        assert_eq!(controller.state(), &BlockSearchState::Idle);
        assert!(!controller.complete(&ticket, Ok(json!("late"))));
        assert_eq!(controller.state(), &BlockSearchState::Idle);
        assert!(controller.last_result().is_none());
    }

    #[test]
    fn panel_marks_previous_result_as_stale_while_searching() {
        let mut controller = BlockSearchController::new();
        assert_eq!(controller.panel_view(), ResultsPanelView::NothingSelected);
        let first = controller.select(0, "q0", "f");
        controller.complete(&first, Ok(json!("r0")));
        assert!(matches!(controller.panel_view(), ResultsPanelView::Ready(r) if r.block_index == 0));
        controller.select(1, "q1", "f");
        match controller.panel_view() {
            ResultsPanelView::Searching { block_index, stale } => {
                assert_eq!(block_index, 1);
                assert_eq!(stale.map(|r| r.block_index), Some(0));
            }
            other => panic!("unexpected view {other:?}"),
        }
    }

    #[test]
    fn reclicking_same_block_is_not_stale() {
        let mut controller = BlockSearchController::new();
        let first = controller.select(2, "q", "f");
        controller.complete(&first, Ok(json!("r")));
        controller.select(2, "q", "f");
        assert!(matches!(controller.panel_view(), ResultsPanelView::Searching { stale: None, .. }));
    }

    #[test]
    fn empty_payloads() {
        let result = |payload| BlockSearchResult { query: "q".into(), payload };
        assert!(result(json!(null)).is_empty());
        assert!(result(json!([])).is_empty());
        assert!(!result(json!({"notes": ["n"]})).is_empty());
    }
}
