//! 记录提取
//!
//! 把一个 embed 容器转成 [`SearchResult`]。每一步都允许找不到，
//! 记录总会产出，能解析出几个字段就填几个。
//!
//! 流程：
//! 1. 标题：embed 子节点 `chatlog__embed-title` -> 其子节点
//!    `chatlog__markdown chatlog__markdown-preserve` -> 第一个文本节点
//! 2. 链接块：带 fields/description 标记的 embed 子节点，仅在找到标题后处理
//! 3. 链接容器：块内第一个 fields 节点，否则第一个 description 节点
//! 4. 容器下的 `<a>`，按文档顺序
//! 5. 按链接文本中的单词把 href 归到 source 和/或 download，后出现的覆盖先出现的

use super::markup::{attr, collect_elements, find_by_class, has_class, subtree_has_text, text};
use crate::kernel::services::ports::SearchResult;
use ego_tree::NodeRef;
use scraper::node::Node;

pub const TITLE_CLASS: &str = "chatlog__embed-title";
pub const PRESERVE_CLASS: &str = "chatlog__markdown chatlog__markdown-preserve";
pub const FIELDS_CLASS: &str = "chatlog__embed-fields";
pub const DESCRIPTION_CLASS: &str = "chatlog__embed-description";

const SOURCE_WORD: &str = "Source";
const DOWNLOAD_WORD: &str = "Download";

pub fn extract_record(embed: NodeRef<'_, Node>) -> SearchResult {
    let name = find_title(embed).unwrap_or_default();
    tracing::debug!(name = %name, "found title");

    let link_blocks = if name.is_empty() {
        Vec::new()
    } else {
        find_link_blocks(embed)
    };

    let anchors: Vec<NodeRef<'_, Node>> = link_blocks
        .into_iter()
        .filter_map(find_link_container)
        .flat_map(|container| collect_elements(container, "a"))
        .collect();

    let (source_link, download_link) = classify_links(&anchors);
    tracing::debug!(source = %source_link, download = %download_link, "found links");

    SearchResult {
        name,
        source_link,
        download_link,
    }
}

fn find_title(embed: NodeRef<'_, Node>) -> Option<String> {
    let mut name = None;
    for title in embed.children().filter(|c| has_class(c, TITLE_CLASS)) {
        for preserve in title.children().filter(|c| has_class(c, PRESERVE_CLASS)) {
            if let Some(value) = preserve.first_child().as_ref().and_then(text) {
                name = Some(value.to_string());
            }
        }
    }
    name
}

fn find_link_blocks(embed: NodeRef<'_, Node>) -> Vec<NodeRef<'_, Node>> {
    embed
        .children()
        .filter(|c| has_class(c, FIELDS_CLASS) || has_class(c, DESCRIPTION_CLASS))
        .collect()
}

fn find_link_container(block: NodeRef<'_, Node>) -> Option<NodeRef<'_, Node>> {
    find_by_class(block, FIELDS_CLASS).or_else(|| find_by_class(block, DESCRIPTION_CLASS))
}

fn classify_links(anchors: &[NodeRef<'_, Node>]) -> (String, String) {
    let mut source_link = String::new();
    let mut download_link = String::new();

    for anchor in anchors {
        let Some(href) = attr(anchor, "href") else {
            tracing::debug!("anchor without href");
            continue;
        };

        if subtree_has_text(*anchor, SOURCE_WORD) {
            source_link = href.to_string();
        }
        if subtree_has_text(*anchor, DOWNLOAD_WORD) {
            download_link = href.to_string();
        }
    }

    (source_link, download_link)
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/search/extractor.rs"]
mod tests;
