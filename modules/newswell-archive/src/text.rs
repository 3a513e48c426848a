use std::sync::LazyLock;

use regex::Regex;
use scraper::Html;

static HASHTAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#([\w]+)").expect("valid regex"));

/// Extract #hashtags from text. Returns deduplicated, lowercased tags
/// without the # prefix, in order of first appearance.
pub fn extract_hashtags(text: &str) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    HASHTAG_RE
        .captures_iter(text)
        .filter_map(|c| {
            let tag = c[1].to_lowercase();
            seen.insert(tag.clone()).then_some(tag)
        })
        .collect()
}

/// Flatten markup to plain text with single-space separators. Used for
/// excerpt synthesis and keyword scans; deterministic for identical input.
pub fn html_to_text(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let text: Vec<&str> = fragment
        .root_element()
        .text()
        .flat_map(|t| t.split_whitespace())
        .collect();
    text.join(" ")
}
