//! 展示循环
//!
//! 只有运行 [`App::run`] 的线程会读写 [`SearchState`] 和输出；
//! 扫描和 relay 都经由 bus 与它通信

use crate::core::Service;
use crate::kernel::services::adapters::{SearchService, SearchTask};
use crate::kernel::services::ports::{SearchRequest, SearchResult, SearchSettings};
use crate::kernel::services::{BusMessage, BusReceiver, BusSender};
use crate::kernel::{SearchState, SearchUpdate};
use std::io::{self, BufRead, Write};

pub struct App<W: Write> {
    service: SearchService,
    bus: BusSender,
    settings: SearchSettings,
    state: SearchState,
    current: Option<SearchTask>,
    input_closed: bool,
    out: W,
}

impl<W: Write> App<W> {
    pub fn new(service: SearchService, bus: BusSender, settings: SearchSettings, out: W) -> Self {
        Self {
            service,
            bus,
            settings,
            state: SearchState::default(),
            current: None,
            input_closed: false,
            out,
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// 处理 bus 消息，直到输入关闭且当前搜索结束，返回输出 sink
    pub fn run(mut self, rx: BusReceiver) -> io::Result<W> {
        tracing::info!(service = self.service.name(), "app running");

        while let Ok(msg) = rx.recv() {
            match msg {
                BusMessage::Query(text) => self.start_search(text)?,
                BusMessage::InputClosed => self.input_closed = true,
                BusMessage::Search(msg) => {
                    if let Some(update) = self.state.apply_message(msg) {
                        self.render(update)?;
                    }
                }
            }

            if self.input_closed && !self.state.searching {
                break;
            }
        }

        Ok(self.out)
    }

    fn start_search(&mut self, text: String) -> io::Result<()> {
        if let Some(previous) = self.current.take() {
            if self.settings.cancel_superseded {
                tracing::debug!(
                    search_id = previous.id(),
                    text = %previous.request().text,
                    folder = %previous.request().folder.display(),
                    "cancelling superseded search"
                );
                previous.cancel();
            }
        }

        let request = SearchRequest::new(self.settings.data_dir.clone(), text.clone())
            .with_file_suffix(self.settings.file_suffix.clone());
        let task = self.service.start(request, self.bus.clone());
        self.state.begin_search(text, task.id());
        self.current = Some(task);

        writeln!(self.out, "Searching: '{}' ...", self.state.query)?;
        self.out.flush()
    }

    fn render(&mut self, update: SearchUpdate) -> io::Result<()> {
        match update {
            SearchUpdate::Result(result) => writeln!(self.out, "{}", format_result(&result))?,
            SearchUpdate::Error(message) => writeln!(self.out, "Error: {}", message)?,
            SearchUpdate::Finished => writeln!(self.out, "Done!")?,
        }
        self.out.flush()
    }
}

pub fn format_result(result: &SearchResult) -> String {
    format!(
        "{}\t{}\t{}",
        result.name, result.source_link, result.download_link
    )
}

/// 把 `reader` 的每一行原样作为请求发到 bus，最后发 `InputClosed`
pub fn forward_lines<R: BufRead>(reader: R, bus: &BusSender) {
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!(error = %e, "stopped reading input");
                break;
            }
        };
        if bus.send_query(line).is_err() {
            return;
        }
    }
    let _ = bus.send(BusMessage::InputClosed);
}

#[cfg(test)]
#[path = "../tests/unit/app.rs"]
mod tests;
