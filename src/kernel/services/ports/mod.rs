//! Service ports: data contracts shared by the engine and the presentation side.

pub mod config;
pub mod search;

pub use config::SearchSettings;
pub use search::{SearchError, SearchMessage, SearchRequest, SearchResult};
