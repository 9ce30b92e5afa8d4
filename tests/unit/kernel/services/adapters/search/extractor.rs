use super::*;
use crate::kernel::services::adapters::search::{locator, markup};
use pretty_assertions::assert_eq;

fn extract_first(html: &str) -> SearchResult {
    let document = markup::parse(html.as_bytes());
    let embed = locator::embeds(&document)
        .next()
        .expect("fixture has an embed");
    extract_record(embed)
}

fn embed(title: &str, body: &str) -> String {
    format!(
        r#"<div class="chatlog__embed-text"><div class="chatlog__embed-title"><div class="chatlog__markdown chatlog__markdown-preserve">{title}</div></div>{body}</div>"#
    )
}

fn description(links: &str) -> String {
    format!(
        r#"<div class="chatlog__embed-description"><div class="chatlog__markdown chatlog__markdown-preserve">{links}</div></div>"#
    )
}

#[test]
fn test_source_and_download() {
    let html = embed(
        "Cool World — City Pack",
        &description(r#"<a href="http://a">Source</a> <a href="http://b">Download</a>"#),
    );

    assert_eq!(
        extract_first(&html),
        SearchResult {
            name: "Cool World — City Pack".to_string(),
            source_link: "http://a".to_string(),
            download_link: "http://b".to_string(),
        }
    );
}

#[test]
fn test_one_anchor_fills_both_links() {
    let html = embed(
        "Bundle",
        &description(r#"<a href="http://both">Download Source Pack</a>"#),
    );

    let record = extract_first(&html);
    assert_eq!(record.source_link, "http://both");
    assert_eq!(record.download_link, "http://both");
}

#[test]
fn test_last_matching_anchor_wins() {
    let html = embed(
        "Mirrors",
        &description(
            r#"<a href="http://first">Download</a> <a href="http://src">Source</a> <a href="http://second">download mirror</a>"#,
        ),
    );

    let record = extract_first(&html);
    assert_eq!(record.download_link, "http://second");
    assert_eq!(record.source_link, "http://src");
}

#[test]
fn test_title_without_link_container() {
    let html = embed("Lonely Title", r#"<div class="chatlog__embed-footer">footer</div>"#);

    assert_eq!(
        extract_first(&html),
        SearchResult {
            name: "Lonely Title".to_string(),
            ..SearchResult::default()
        }
    );
}

#[test]
fn test_links_ignored_without_title() {
    let html = format!(
        r#"<div class="chatlog__embed-text">{}</div>"#,
        description(r#"<a href="http://a">Source</a> <a href="http://b">Download</a>"#)
    );

    assert_eq!(extract_first(&html), SearchResult::default());
}

#[test]
fn test_fields_preferred_over_description() {
    let body = r#"<div class="chatlog__embed-description">
        <a href="http://outer">Download</a>
        <div class="wrapper"><div class="chatlog__embed-fields"><a href="http://inner">Download</a></div></div>
    </div>"#;
    let html = embed("Nested", body);

    assert_eq!(extract_first(&html).download_link, "http://inner");
}

#[test]
fn test_fields_block_links() {
    let body = r#"<div class="chatlog__embed-fields"><div class="chatlog__embed-field">
        <div class="chatlog__embed-field-value"><a href="http://dl">Download</a></div>
    </div></div>"#;
    let html = embed("Fields", body);

    assert_eq!(extract_first(&html).download_link, "http://dl");
}

#[test]
fn test_later_block_overwrites_earlier() {
    let body = format!(
        r#"{}<div class="chatlog__embed-fields"><a href="http://from-fields">Download</a></div>"#,
        description(r#"<a href="http://from-description">Download</a> <a href="http://s">Source</a>"#)
    );
    let html = embed("Two blocks", &body);

    let record = extract_first(&html);
    assert_eq!(record.download_link, "http://from-fields");
    assert_eq!(record.source_link, "http://s");
}

#[test]
fn test_href_looked_up_by_name() {
    let html = embed(
        "Attrs",
        &description(
            r#"<a class="chatlog__link" target="_blank" href="http://dl">Download</a> <a title="x">Source</a>"#,
        ),
    );

    let record = extract_first(&html);
    assert_eq!(record.download_link, "http://dl");
    assert_eq!(record.source_link, "");
}

#[test]
fn test_link_words_found_in_nested_text() {
    let html = embed(
        "Nested text",
        &description(r#"<a href="http://s"><span><em>view </em><strong>SOURCE</strong></span></a>"#),
    );

    assert_eq!(extract_first(&html).source_link, "http://s");
}

#[test]
fn test_unlabelled_anchor_ignored() {
    let html = embed("Plain", &description(r#"<a href="http://x">website</a>"#));

    let record = extract_first(&html);
    assert_eq!(record.source_link, "");
    assert_eq!(record.download_link, "");
}

#[test]
fn test_entities_decoded() {
    let html = embed(
        "Tom &amp; Jerry&#39;s Place",
        &description(r#"<a href="http://x/get?id=1&amp;dl=1">Download</a>"#),
    );

    let record = extract_first(&html);
    assert_eq!(record.name, "Tom & Jerry's Place");
    assert_eq!(record.download_link, "http://x/get?id=1&dl=1");
}

#[test]
fn test_title_needs_leading_text_node() {
    let html = embed(
        "<strong>Bold</strong> title",
        &description(r#"<a href="http://b">Download</a>"#),
    );

    assert_eq!(extract_first(&html), SearchResult::default());
}

#[test]
fn test_title_class_must_match_exactly() {
    let html = r#"<div class="chatlog__embed-text"><div class="chatlog__embed-title chatlog__embed-title--big"><div class="chatlog__markdown chatlog__markdown-preserve">Big</div></div></div>"#;

    assert_eq!(extract_first(html).name, "");
}

#[test]
fn test_deeply_nested_anchor() {
    let depth = 20_000;
    let links = format!(
        r#"{}<a href="http://d">Download</a>{}"#,
        "<span>".repeat(depth),
        "</span>".repeat(depth)
    );
    let html = embed("Deep", &description(&links));

    let record = extract_first(&html);
    assert_eq!(record.name, "Deep");
    assert_eq!(record.download_link, "http://d");
}
