//! Service adapters: filesystem and runtime backed implementations.

pub mod search;
pub mod settings;

pub use search::{MatchFilter, SearchService, SearchTask};
pub use settings::{get_settings_path, load_settings, read_settings};
