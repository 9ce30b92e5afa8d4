//! Embed 定位

use super::markup::{has_class, is_element};
use ego_tree::NodeRef;
use scraper::node::Node;
use scraper::Html;

pub const EMBED_CONTAINER_TAG: &str = "div";
pub const EMBED_CLASS: &str = "chatlog__embed-text";

pub fn is_embed(node: &NodeRef<'_, Node>) -> bool {
    is_element(node, EMBED_CONTAINER_TAG) && has_class(node, EMBED_CLASS)
}

/// 惰性先序遍历，按从上到下的顺序产出 embed 容器（嵌套的 embed 也会产出）
pub fn embeds(document: &Html) -> impl Iterator<Item = NodeRef<'_, Node>> {
    document.tree.root().descendants().filter(is_embed)
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/search/locator.rs"]
mod tests;
