use crate::document::Document;

/// Path segments that mark an article permalink.
const ARTICLE_PATH_SEGMENTS: &[&str] = &["/read/", "/article/", "/story/", "/post/"];

/// Anchor-text keywords that mark a link into an article index.
const INDEX_TEXT_KEYWORDS: &[&str] = &["read", "blog", "stories"];

/// Harvest candidate article links from an index page.
///
/// An anchor qualifies when its href contains an article path segment or its
/// link text contains an index keyword. Relative hrefs are resolved against
/// `base_url`, fragments stripped, non-http(s) schemes dropped. Deduplicated
/// in document order and capped at `max_links` to bound a discovery pass.
pub fn discover_article_links(html: &str, base_url: &str, max_links: usize) -> Vec<String> {
    let doc = Document::parse(html, base_url);
    let base = url::Url::parse(base_url).ok();

    let mut seen = std::collections::HashSet::new();
    let mut links = Vec::new();

    for (href, text) in doc.anchors() {
        let text_lower = text.to_lowercase();
        let qualifies = ARTICLE_PATH_SEGMENTS.iter().any(|seg| href.contains(seg))
            || INDEX_TEXT_KEYWORDS.iter().any(|kw| text_lower.contains(kw));
        if !qualifies {
            continue;
        }

        let Some(resolved) = resolve_href(&href, base.as_ref()) else {
            continue;
        };

        if seen.insert(resolved.clone()) {
            links.push(resolved);
            if links.len() >= max_links {
                break;
            }
        }
    }

    links
}

/// Resolve a raw href against a base URL, returning an absolute http(s) URL
/// with fragment stripped.
fn resolve_href(raw: &str, base: Option<&url::Url>) -> Option<String> {
    let mut parsed = if raw.starts_with("http://") || raw.starts_with("https://") {
        url::Url::parse(raw).ok()?
    } else {
        base?.join(raw).ok()?
    };
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return None;
    }
    parsed.set_fragment(None);
    Some(parsed.to_string())
}
