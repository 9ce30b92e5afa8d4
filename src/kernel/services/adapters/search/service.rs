//! 搜索调度
//!
//! 每个请求一个扫描任务，顺序遍历文档，把命中的记录推入有界结果流。
//! 扫描结束时 drop sender 即关闭结果流，消费端见 [`super::relay`]

use super::filter::MatchFilter;
use super::relay::spawn_relay;
use super::{extractor, loader, locator, markup};
use crate::core::Service;
use crate::kernel::services::bus::BusSender;
use crate::kernel::services::ports::{SearchMessage, SearchRequest};
use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::mpsc::{self, SyncSender};
use std::sync::Arc;

static SEARCH_ID: AtomicU64 = AtomicU64::new(0);

fn next_search_id() -> u64 {
    SEARCH_ID.fetch_add(1, Ordering::Relaxed)
}

/// 一次扫描的句柄：id、对应的请求、扫描任务轮询的取消标记
pub struct SearchTask {
    id: u64,
    request: SearchRequest,
    cancelled: Arc<AtomicBool>,
}

impl SearchTask {
    pub fn new(request: SearchRequest) -> Self {
        Self {
            id: next_search_id(),
            request,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn request(&self) -> &SearchRequest {
        &self.request
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    fn cancelled_flag(&self) -> Arc<AtomicBool> {
        self.cancelled.clone()
    }
}

pub struct SearchService {
    runtime: tokio::runtime::Handle,
    result_buffer: usize,
}

impl SearchService {
    pub fn new(runtime: tokio::runtime::Handle) -> Self {
        Self {
            runtime,
            result_buffer: 16,
        }
    }

    pub fn with_result_buffer(mut self, result_buffer: usize) -> Self {
        self.result_buffer = result_buffer;
        self
    }

    /// 启动扫描，并启动把结果流转发到 `bus` 的 relay
    pub fn start(&self, request: SearchRequest, bus: BusSender) -> SearchTask {
        let (tx, rx) = mpsc::sync_channel(self.result_buffer);
        let task = self.search_in_dir(request, tx);
        spawn_relay(&self.runtime, task.id(), rx, bus);
        task
    }

    /// 启动扫描并写入 `tx`，扫描结束时结果流关闭
    pub fn search_in_dir(
        &self,
        request: SearchRequest,
        tx: SyncSender<SearchMessage>,
    ) -> SearchTask {
        let task = SearchTask::new(request.clone());
        let search_id = task.id();
        let cancelled = task.cancelled_flag();

        self.runtime.spawn(async move {
            let tx_for_blocking = tx.clone();
            let result = tokio::task::spawn_blocking(move || {
                scan_documents(&request, search_id, &cancelled, &tx_for_blocking)
            })
            .await;

            if let Err(e) = result {
                tracing::error!(search_id, error = %e, "scan task failed");
                let _ = tx.send(SearchMessage::Error {
                    search_id,
                    message: format!("Search task failed: {}", e),
                });
            }
        });

        task
    }
}

impl Service for SearchService {
    fn name(&self) -> &'static str {
        "SearchService"
    }
}

/// 消费端已断开，无需继续扫描
struct Disconnected;

fn scan_documents(
    request: &SearchRequest,
    search_id: u64,
    cancelled: &AtomicBool,
    tx: &SyncSender<SearchMessage>,
) {
    tracing::info!(
        search_id,
        folder = %request.folder.display(),
        text = %request.text,
        "search started"
    );

    let documents = match loader::list_documents(&request.folder, &request.file_suffix) {
        Ok(documents) => documents,
        Err(e) => {
            tracing::error!(search_id, error = %e, "cannot list documents");
            let _ = tx.send(SearchMessage::Error {
                search_id,
                message: e.to_string(),
            });
            return;
        }
    };

    let filter = MatchFilter::new(&request.text);
    let mut documents_scanned = 0usize;

    for path in documents {
        if cancelled.load(Ordering::Relaxed) {
            break;
        }

        if scan_document(&path, &filter, search_id, cancelled, tx).is_err() {
            tracing::info!(search_id, "result stream closed by consumer");
            return;
        }

        documents_scanned += 1;
        let progress = SearchMessage::Progress {
            search_id,
            documents_scanned,
        };
        if tx.send(progress).is_err() {
            return;
        }
    }

    if cancelled.load(Ordering::Relaxed) {
        tracing::info!(search_id, documents_scanned, "search cancelled");
        let _ = tx.send(SearchMessage::Cancelled { search_id });
        return;
    }

    tracing::info!(search_id, documents_scanned, "search finished");
}

fn scan_document(
    path: &Path,
    filter: &MatchFilter,
    search_id: u64,
    cancelled: &AtomicBool,
    tx: &SyncSender<SearchMessage>,
) -> Result<(), Disconnected> {
    tracing::info!(search_id, file = %path.display(), "searching file");

    let bytes = match loader::read_document(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(search_id, file = %path.display(), error = %e, "skipping document");
            return tx
                .send(SearchMessage::DocumentSkipped {
                    search_id,
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })
                .map_err(|_| Disconnected);
        }
    };

    let document = markup::parse(&bytes);
    for embed in locator::embeds(&document) {
        if cancelled.load(Ordering::Relaxed) {
            break;
        }

        let result = extractor::extract_record(embed);
        if !filter.matches(&result) {
            tracing::debug!(search_id, record = ?result, "no match");
            continue;
        }

        tracing::info!(search_id, record = ?result, "result found");
        tx.send(SearchMessage::Result { search_id, result })
            .map_err(|_| Disconnected)?;
    }

    Ok(())
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/search/service.rs"]
mod tests;
