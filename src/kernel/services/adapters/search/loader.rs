//! 文档加载：从目录中挑出导出的聊天记录

use crate::kernel::services::ports::search::{Result, SearchError};
use std::path::{Path, PathBuf};

/// 列出 `folder` 中文件名以 `suffix` 结尾的文件
///
/// 顺序即文件系统返回的顺序；无法 stat 的条目和非普通文件直接跳过
pub fn list_documents(folder: &Path, suffix: &str) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(folder).map_err(|source| SearchError::ReadDir {
        path: folder.to_path_buf(),
        source,
    })?;

    let mut documents = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::warn!(folder = %folder.display(), error = %e, "skipping unreadable entry");
                continue;
            }
        };

        let name = entry.file_name();
        if !name.to_string_lossy().ends_with(suffix) {
            continue;
        }

        match entry.file_type() {
            Ok(file_type) if file_type.is_dir() => continue,
            Ok(_) => documents.push(entry.path()),
            Err(e) => {
                tracing::warn!(path = %entry.path().display(), error = %e, "skipping entry");
            }
        }
    }

    Ok(documents)
}

pub fn read_document(path: &Path) -> Result<Vec<u8>> {
    Ok(std::fs::read(path)?)
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/search/loader.rs"]
mod tests;
