//! 结果流的消费端
//!
//! 与扫描任务独立运行：逐条转发到 bus，流关闭时补发一条 `Complete`

use crate::kernel::services::bus::BusSender;
use crate::kernel::services::ports::SearchMessage;
use std::sync::mpsc::Receiver;
use tokio::task::JoinHandle;

pub fn spawn_relay(
    runtime: &tokio::runtime::Handle,
    search_id: u64,
    rx: Receiver<SearchMessage>,
    bus: BusSender,
) -> JoinHandle<()> {
    runtime.spawn_blocking(move || relay(search_id, rx, &bus))
}

pub fn relay(search_id: u64, rx: Receiver<SearchMessage>, bus: &BusSender) {
    let mut documents_scanned = 0usize;
    let mut total_results = 0usize;

    // 所有 sender 都 drop 后 `recv` 才会失败
    while let Ok(msg) = rx.recv() {
        match &msg {
            SearchMessage::Result { .. } => total_results += 1,
            SearchMessage::Progress {
                documents_scanned: n,
                ..
            } => documents_scanned = *n,
            _ => {}
        }

        let terminal = msg.is_terminal();
        if bus.send_search(msg).is_err() {
            tracing::debug!(search_id, "bus closed, dropping result stream");
            return;
        }
        if terminal {
            return;
        }
    }

    tracing::debug!(search_id, total_results, "result stream closed");
    let _ = bus.send_search(SearchMessage::Complete {
        search_id,
        documents_scanned,
        total_results,
    });
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/search/relay.rs"]
mod tests;
