use super::*;
use crate::kernel::services::adapters::search::markup::{parse, text};

fn first_texts(html: &str) -> Vec<String> {
    let document = parse(html.as_bytes());
    embeds(&document)
        .map(|embed| {
            embed
                .first_child()
                .as_ref()
                .and_then(text)
                .unwrap_or_default()
                .to_string()
        })
        .collect()
}

#[test]
fn test_finds_embeds_in_document_order() {
    let html = r#"
        <div class="chatlog">
          <div class="chatlog__embed"><div class="chatlog__embed-text">one</div></div>
          <div><div><div class="chatlog__embed-text">two</div></div></div>
        </div>
        <div class="chatlog__embed-text">three</div>
    "#;

    assert_eq!(first_texts(html), vec!["one", "two", "three"]);
}

#[test]
fn test_class_must_match_exactly() {
    let html = r#"
        <div class="chatlog__embed-text extra">token list</div>
        <div class=" chatlog__embed-text">padded</div>
        <div class="chatlog__embed-text">exact</div>
    "#;

    assert_eq!(first_texts(html), vec!["exact"]);
}

#[test]
fn test_only_div_containers() {
    let html = r#"
        <span class="chatlog__embed-text">span</span>
        <section class="chatlog__embed-text">section</section>
        <div class="chatlog__embed-text">div</div>
    "#;

    assert_eq!(first_texts(html), vec!["div"]);
}

#[test]
fn test_nested_embeds_outer_first() {
    let html = r#"<div class="chatlog__embed-text">outer<div class="chatlog__embed-text">inner</div></div>"#;

    assert_eq!(first_texts(html), vec!["outer", "inner"]);
}

#[test]
fn test_no_embeds() {
    let html = "<html><body><p>nothing shared today</p></body></html>";
    assert!(first_texts(html).is_empty());
}

#[test]
fn test_iterator_ends() {
    let html = r#"<div class="chatlog__embed-text">a</div><div class="chatlog__embed-text">b</div>"#;
    let document = parse(html.as_bytes());

    let mut iter = embeds(&document);
    assert!(iter.next().is_some());
    assert!(iter.next().is_some());
    assert!(iter.next().is_none());
}
