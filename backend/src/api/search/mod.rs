//! Search API route handlers and module exports.

mod search_by_block_text;
pub use search_by_block_text::search_by_block_text;
