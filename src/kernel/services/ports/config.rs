use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::search::DEFAULT_FILE_SUFFIX;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    pub data_dir: PathBuf,
    pub file_suffix: String,
    /// Capacity of the result stream; 0 makes every send a rendezvous.
    pub result_buffer: usize,
    pub cancel_superseded: bool,
    pub log_file: PathBuf,
    pub log_filter: String,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            file_suffix: DEFAULT_FILE_SUFFIX.to_string(),
            result_buffer: 16,
            cancel_superseded: true,
            log_file: PathBuf::from("app.log"),
            log_filter: "vrchive=info".to_string(),
        }
    }
}
