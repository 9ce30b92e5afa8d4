//! 资源搜索引擎
//!
//! - loader：从数据目录挑出聊天记录文件
//! - markup / locator：解析 HTML，定位 embed 块
//! - extractor：从 embed 中提取标题、source 与 download 链接
//! - filter：对提取出的字段做大小写不敏感匹配
//! - service / relay：扫描任务，以及消费其结果流的任务

pub mod extractor;
pub mod filter;
pub mod loader;
pub mod locator;
pub mod markup;
mod relay;
mod service;

pub use filter::MatchFilter;
pub use relay::{relay, spawn_relay};
pub use service::{SearchService, SearchTask};
