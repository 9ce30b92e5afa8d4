use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, SearchError>;

#[derive(Debug)]
pub enum SearchError {
    Io(io::Error),
    ReadDir { path: PathBuf, source: io::Error },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchError::Io(e) => write!(f, "IO error: {}", e),
            SearchError::ReadDir { path, source } => {
                write!(f, "Error reading directory {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SearchError::Io(e) => Some(e),
            SearchError::ReadDir { source, .. } => Some(source),
        }
    }
}

impl From<io::Error> for SearchError {
    fn from(e: io::Error) -> Self {
        SearchError::Io(e)
    }
}

/// One resource record pulled out of an embed block.
///
/// Any field may be empty when the embed lacked the corresponding markup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub name: String,
    pub source_link: String,
    pub download_link: String,
}

impl SearchResult {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.source_link.is_empty() && self.download_link.is_empty()
    }

    pub fn fields(&self) -> [&str; 3] {
        [&self.name, &self.source_link, &self.download_link]
    }
}

/// Snapshot of what the user asked for; never changes once a scan starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub folder: PathBuf,
    pub text: String,
    pub file_suffix: String,
}

impl SearchRequest {
    pub fn new(folder: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            folder: folder.into(),
            text: text.into(),
            file_suffix: DEFAULT_FILE_SUFFIX.to_string(),
        }
    }

    pub fn with_file_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.file_suffix = suffix.into();
        self
    }
}

pub const DEFAULT_FILE_SUFFIX: &str = ".html";

#[derive(Debug, Clone)]
pub enum SearchMessage {
    Result {
        search_id: u64,
        result: SearchResult,
    },
    DocumentSkipped {
        search_id: u64,
        path: PathBuf,
        message: String,
    },
    Progress {
        search_id: u64,
        documents_scanned: usize,
    },
    Complete {
        search_id: u64,
        documents_scanned: usize,
        total_results: usize,
    },
    Cancelled {
        search_id: u64,
    },
    Error {
        search_id: u64,
        message: String,
    },
}

impl SearchMessage {
    pub fn search_id(&self) -> u64 {
        match self {
            SearchMessage::Result { search_id, .. }
            | SearchMessage::DocumentSkipped { search_id, .. }
            | SearchMessage::Progress { search_id, .. }
            | SearchMessage::Complete { search_id, .. }
            | SearchMessage::Cancelled { search_id }
            | SearchMessage::Error { search_id, .. } => *search_id,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SearchMessage::Complete { .. } | SearchMessage::Cancelled { .. }
        )
    }
}
