use crate::kernel::services::ports::{SearchMessage, SearchResult};
use std::path::PathBuf;

/// What the presentation side knows about the current search.
///
/// Only messages carrying `active_search_id` are applied, so a superseded
/// scan that is still draining can never leak results into a newer search.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub query: String,
    pub searching: bool,
    pub active_search_id: Option<u64>,
    pub documents_scanned: usize,
    pub results: Vec<SearchResult>,
    pub skipped: Vec<PathBuf>,
    pub last_error: Option<String>,
}

/// Change produced by applying a message, for the renderer to act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchUpdate {
    Result(SearchResult),
    Error(String),
    Finished,
}

impl SearchState {
    pub fn begin_search(&mut self, query: impl Into<String>, search_id: u64) {
        self.query = query.into();
        self.searching = true;
        self.active_search_id = Some(search_id);
        self.documents_scanned = 0;
        self.results.clear();
        self.skipped.clear();
        self.last_error = None;
    }

    pub fn apply_message(&mut self, msg: SearchMessage) -> Option<SearchUpdate> {
        if self.active_search_id != Some(msg.search_id()) {
            return None;
        }

        match msg {
            SearchMessage::Result { result, .. } => {
                self.results.push(result.clone());
                Some(SearchUpdate::Result(result))
            }
            SearchMessage::DocumentSkipped { path, .. } => {
                self.skipped.push(path);
                None
            }
            SearchMessage::Progress {
                documents_scanned, ..
            } => {
                self.documents_scanned = documents_scanned;
                None
            }
            SearchMessage::Error { message, .. } => {
                self.last_error = Some(message.clone());
                Some(SearchUpdate::Error(message))
            }
            SearchMessage::Complete {
                documents_scanned, ..
            } => {
                self.documents_scanned = documents_scanned;
                self.finish()
            }
            SearchMessage::Cancelled { .. } => self.finish(),
        }
    }

    fn finish(&mut self) -> Option<SearchUpdate> {
        if !self.searching {
            return None;
        }
        self.searching = false;
        Some(SearchUpdate::Finished)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/search.rs"]
mod tests;
