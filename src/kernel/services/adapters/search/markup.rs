//! HTML 解析的薄封装：locator 和 extractor 用到的节点谓词

use ego_tree::iter::Edge;
use ego_tree::NodeRef;
use scraper::node::Node;
use scraper::Html;

pub fn parse(bytes: &[u8]) -> Html {
    Html::parse_document(&String::from_utf8_lossy(bytes))
}

pub fn attr<'a>(node: &NodeRef<'a, Node>, key: &str) -> Option<&'a str> {
    match node.value() {
        Node::Element(element) => element.attr(key),
        _ => None,
    }
}

/// 与 `class` 原始值整体比较，不按空格拆分
pub fn has_class(node: &NodeRef<'_, Node>, class_name: &str) -> bool {
    attr(node, "class") == Some(class_name)
}

pub fn is_element(node: &NodeRef<'_, Node>, tag: &str) -> bool {
    matches!(node.value(), Node::Element(element) if element.name() == tag)
}

pub fn text<'a>(node: &NodeRef<'a, Node>) -> Option<&'a str> {
    match node.value() {
        Node::Text(text) => Some(&**text),
        _ => None,
    }
}

/// 子树中（含 `node` 自身）第一个带 `class_name` 的节点
pub fn find_by_class<'a>(node: NodeRef<'a, Node>, class_name: &str) -> Option<NodeRef<'a, Node>> {
    node.descendants().find(|n| has_class(n, class_name))
}

/// 按文档顺序收集 `tag` 元素，命中后不再进入其子树
/// 迭代遍历，不受嵌套深度影响
pub fn collect_elements<'a>(node: NodeRef<'a, Node>, tag: &str) -> Vec<NodeRef<'a, Node>> {
    let mut out = Vec::new();
    let mut open_matches = 0usize;
    for edge in node.traverse() {
        match edge {
            Edge::Open(n) if is_element(&n, tag) => {
                if open_matches == 0 {
                    out.push(n);
                }
                open_matches += 1;
            }
            Edge::Close(n) if is_element(&n, tag) => open_matches -= 1,
            _ => {}
        }
    }
    out
}

/// 子树中是否有文本节点包含 `needle`（忽略大小写）
pub fn subtree_has_text(node: NodeRef<'_, Node>, needle: &str) -> bool {
    let needle = needle.to_lowercase();
    node.descendants()
        .filter_map(|n| text(&n))
        .any(|t| t.to_lowercase().contains(&needle))
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/search/markup.rs"]
mod tests;
