// Field extraction via ordered fallback strategy chains.
//
// The external site's markup is not under our control: every field is looked
// up through a prioritized list of strategies, and the first qualifying
// value wins. The chains are data, not logic, so operators can swap them
// out when the site's structure drifts.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;

use crate::document::Document;
use crate::fetch::{ArchiveError, Result};

static SCRIPT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script[^>]*>.*?</script>").expect("valid regex"));
static STYLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<style[^>]*>.*?</style>").expect("valid regex"));
static COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("valid regex"));
static AD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<(?:div|aside)[^>]*class="[^"]*\b(?:ads|advertisement)\b[^"]*"[^>]*>.*?</(?:div|aside)>"#)
        .expect("valid regex")
});

/// Where a strategy reads its value from once the selector matches.
#[derive(Debug, Clone)]
pub enum ValueSource {
    Text,
    Attr(String),
    InnerHtml,
}

/// One fallback lookup: first element matching `selector`, read via
/// `source`, qualifying only if the value is at least `min_chars` long.
#[derive(Debug, Clone)]
pub struct Strategy {
    pub selector: String,
    pub source: ValueSource,
    pub min_chars: usize,
}

impl Strategy {
    pub fn text(selector: &str, min_chars: usize) -> Self {
        Self {
            selector: selector.to_string(),
            source: ValueSource::Text,
            min_chars,
        }
    }

    pub fn attr(selector: &str, attr: &str, min_chars: usize) -> Self {
        Self {
            selector: selector.to_string(),
            source: ValueSource::Attr(attr.to_string()),
            min_chars,
        }
    }

    pub fn inner_html(selector: &str, min_chars: usize) -> Self {
        Self {
            selector: selector.to_string(),
            source: ValueSource::InnerHtml,
            min_chars,
        }
    }
}

/// Per-field strategy chains. The defaults encode the legacy site's observed
/// markup; they are a starting point, not a contract.
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    pub title: Vec<Strategy>,
    pub content: Vec<Strategy>,
    pub published: Vec<Strategy>,
    pub image: Vec<Strategy>,
    pub author: Vec<Strategy>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            title: vec![
                Strategy::text("h1", 6),
                Strategy::text(".post-title", 6),
                Strategy::text(".article-title", 6),
                Strategy::text(".entry-title", 6),
                Strategy::attr(r#"meta[property="og:title"]"#, "content", 6),
                Strategy::text("title", 6),
            ],
            content: vec![
                Strategy::inner_html(".post-content", 101),
                Strategy::inner_html(".article-content", 101),
                Strategy::inner_html(".entry-content", 101),
                Strategy::inner_html(".content", 101),
                Strategy::inner_html("main article", 101),
                Strategy::inner_html(".story-body", 101),
            ],
            published: vec![
                Strategy::attr(r#"meta[property="article:published_time"]"#, "content", 4),
                Strategy::attr(r#"meta[name="publication-date"]"#, "content", 4),
                Strategy::attr("time[datetime]", "datetime", 4),
                Strategy::text(".published-date", 4),
                Strategy::text(".post-date", 4),
            ],
            image: vec![
                Strategy::attr(r#"meta[property="og:image"]"#, "content", 1),
                Strategy::attr(".featured-image img", "src", 1),
                Strategy::attr(".post-thumbnail img", "src", 1),
                Strategy::attr("article img", "src", 1),
            ],
            author: vec![
                Strategy::attr(r#"meta[name="author"]"#, "content", 3),
                Strategy::text(".author-name", 3),
                Strategy::text(".post-author", 3),
                Strategy::text(".byline", 3),
            ],
        }
    }
}

/// The typed field values pulled out of one document. Optional fields carry
/// `None` when every strategy struck out; the caller supplies defaults.
#[derive(Debug, Clone)]
pub struct ExtractedFields {
    pub title: String,
    /// Cleaned markup: scripts, styles, comments and ad blocks removed.
    pub content: String,
    pub published_at: Option<DateTime<Utc>>,
    pub featured_image: Option<String>,
    pub author: Option<String>,
    /// Comma-split keyword metadata, when the page declares any.
    pub meta_keywords: Vec<String>,
}

pub struct FieldExtractor {
    config: ExtractorConfig,
}

impl Default for FieldExtractor {
    fn default() -> Self {
        Self::new(ExtractorConfig::default())
    }
}

impl FieldExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Extract the full field set. Title and content are mandatory; a
    /// document yielding neither a qualifying title nor qualifying content
    /// fails extraction entirely and is dropped by the caller.
    pub fn extract(&self, doc: &Document) -> Result<ExtractedFields> {
        let title = self
            .lookup(doc, &self.config.title)
            .ok_or_else(|| ArchiveError::ExtractionFailed {
                url: doc.url().to_string(),
                field: "title",
            })?;

        let content = self
            .lookup(doc, &self.config.content)
            .map(|raw| clean_markup(&raw))
            .ok_or_else(|| ArchiveError::ExtractionFailed {
                url: doc.url().to_string(),
                field: "content",
            })?;

        Ok(ExtractedFields {
            title,
            content,
            published_at: self.published_at(doc),
            featured_image: self.featured_image(doc),
            author: self.lookup(doc, &self.config.author),
            meta_keywords: meta_keywords(doc),
        })
    }

    /// Walk a strategy chain; the first non-empty, length-qualified value
    /// wins.
    fn lookup(&self, doc: &Document, chain: &[Strategy]) -> Option<String> {
        chain.iter().find_map(|strategy| {
            let value = match &strategy.source {
                ValueSource::Text => doc.select_text(&strategy.selector),
                ValueSource::Attr(name) => doc.select_attr(&strategy.selector, name),
                ValueSource::InnerHtml => doc.select_inner_html(&strategy.selector),
            }?;
            (value.chars().count() >= strategy.min_chars).then_some(value)
        })
    }

    /// Published date: a raw value that fails to parse does not stop the
    /// chain; later strategies still get a shot.
    fn published_at(&self, doc: &Document) -> Option<DateTime<Utc>> {
        self.config.published.iter().find_map(|strategy| {
            let raw = match &strategy.source {
                ValueSource::Text => doc.select_text(&strategy.selector),
                ValueSource::Attr(name) => doc.select_attr(&strategy.selector, name),
                ValueSource::InnerHtml => doc.select_inner_html(&strategy.selector),
            }?;
            parse_date(&raw)
        })
    }

    /// Featured image, resolved to an absolute URL against the page.
    fn featured_image(&self, doc: &Document) -> Option<String> {
        let src = self.lookup(doc, &self.config.image)?;
        if src.starts_with("http://") || src.starts_with("https://") {
            return Some(src);
        }
        let base = url::Url::parse(doc.url()).ok()?;
        Some(base.join(&src).ok()?.to_string())
    }
}

/// Strip scripts, styles, comments and flat ad blocks from article markup.
fn clean_markup(html: &str) -> String {
    let cleaned = SCRIPT_RE.replace_all(html, "");
    let cleaned = STYLE_RE.replace_all(&cleaned, "");
    let cleaned = COMMENT_RE.replace_all(&cleaned, "");
    let cleaned = AD_RE.replace_all(&cleaned, "");
    cleaned.trim().to_string()
}

fn meta_keywords(doc: &Document) -> Vec<String> {
    doc.select_attr(r#"meta[name="keywords"]"#, "content")
        .map(|raw| {
            raw.split(',')
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

/// Parse the date formats the legacy site was seen using: RFC 3339 meta
/// tags, RFC 2822 bylines, bare dates.
fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(d.and_time(chrono::NaiveTime::MIN).and_utc());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    const URL: &str = "https://legacy.example.org/read/first-post";

    fn doc(html: &str) -> Document {
        Document::parse(html, URL)
    }

    fn long_body() -> String {
        format!("<p>{}</p>", "A community story. ".repeat(10))
    }

    // --- title chain ---

    #[test]
    fn h1_wins_over_og_title() {
        let html = format!(
            r#"<head><meta property="og:title" content="Meta Title Here"></head>
               <h1>Heading Title</h1><div class="content">{}</div>"#,
            long_body()
        );
        let fields = FieldExtractor::default().extract(&doc(&html)).unwrap();
        assert_eq!(fields.title, "Heading Title");
    }

    #[test]
    fn falls_back_to_og_title_when_no_heading() {
        let html = format!(
            r#"<head><meta property="og:title" content="Meta Title Here"></head>
               <div class="content">{}</div>"#,
            long_body()
        );
        let fields = FieldExtractor::default().extract(&doc(&html)).unwrap();
        assert_eq!(fields.title, "Meta Title Here");
    }

    #[test]
    fn short_title_does_not_qualify() {
        // "Hi" fails the length gate; the <title> element qualifies instead.
        let html = format!(
            r#"<head><title>A Longer Page Title</title></head>
               <h1>Hi</h1><div class="content">{}</div>"#,
            long_body()
        );
        let fields = FieldExtractor::default().extract(&doc(&html)).unwrap();
        assert_eq!(fields.title, "A Longer Page Title");
    }

    #[test]
    fn missing_title_fails_extraction() {
        let html = format!(r#"<div class="content">{}</div>"#, long_body());
        let err = FieldExtractor::default().extract(&doc(&html)).unwrap_err();
        assert!(matches!(
            err,
            ArchiveError::ExtractionFailed { field: "title", .. }
        ));
    }

    // --- content chain ---

    #[test]
    fn post_content_wins_over_generic_content() {
        let html = format!(
            r#"<h1>Heading Title</h1>
               <div class="post-content">{}</div>
               <div class="content">{}</div>"#,
            long_body().replace("community", "primary"),
            long_body()
        );
        let fields = FieldExtractor::default().extract(&doc(&html)).unwrap();
        assert!(fields.content.contains("primary"));
    }

    #[test]
    fn short_content_fails_extraction() {
        let html = r#"<h1>Heading Title</h1><div class="content">too short</div>"#;
        let err = FieldExtractor::default().extract(&doc(html)).unwrap_err();
        assert!(matches!(
            err,
            ArchiveError::ExtractionFailed {
                field: "content",
                ..
            }
        ));
    }

    #[test]
    fn scripts_and_ads_are_stripped() {
        let html = format!(
            r#"<h1>Heading Title</h1>
               <div class="content">
                 <script>var x = 1;</script>
                 <style>.a {{ color: red }}</style>
                 <div class="ads banner">Buy things</div>
                 <!-- tracking -->
                 {}
               </div>"#,
            long_body()
        );
        let fields = FieldExtractor::default().extract(&doc(&html)).unwrap();
        assert!(!fields.content.contains("var x"));
        assert!(!fields.content.contains("color: red"));
        assert!(!fields.content.contains("Buy things"));
        assert!(!fields.content.contains("tracking"));
        assert!(fields.content.contains("A community story."));
    }

    // --- optional fields ---

    #[test]
    fn published_time_meta_parses_rfc3339() {
        let html = format!(
            r#"<head><meta property="article:published_time" content="2023-06-15T10:30:00Z"></head>
               <h1>Heading Title</h1><div class="content">{}</div>"#,
            long_body()
        );
        let fields = FieldExtractor::default().extract(&doc(&html)).unwrap();
        let date = fields.published_at.unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2023, 6, 15));
    }

    #[test]
    fn unparseable_date_falls_through_to_next_strategy() {
        let html = format!(
            r#"<head><meta property="article:published_time" content="last Tuesday"></head>
               <h1>Heading Title</h1>
               <time datetime="2024-02-01">Feb</time>
               <div class="content">{}</div>"#,
            long_body()
        );
        let fields = FieldExtractor::default().extract(&doc(&html)).unwrap();
        let date = fields.published_at.unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2024, 2, 1));
    }

    #[test]
    fn missing_date_is_none() {
        let html = format!(
            "<h1>Heading Title</h1><div class=\"content\">{}</div>",
            long_body()
        );
        let fields = FieldExtractor::default().extract(&doc(&html)).unwrap();
        assert!(fields.published_at.is_none());
    }

    #[test]
    fn relative_image_resolves_against_page_url() {
        let html = format!(
            r#"<h1>Heading Title</h1>
               <div class="featured-image"><img src="/img/cover.jpg"></div>
               <div class="content">{}</div>"#,
            long_body()
        );
        let fields = FieldExtractor::default().extract(&doc(&html)).unwrap();
        assert_eq!(
            fields.featured_image.as_deref(),
            Some("https://legacy.example.org/img/cover.jpg")
        );
    }

    #[test]
    fn author_meta_and_keywords_are_collected() {
        let html = format!(
            r#"<head>
                 <meta name="author" content="Ade Johnson">
                 <meta name="keywords" content="community, culture , ">
               </head>
               <h1>Heading Title</h1><div class="content">{}</div>"#,
            long_body()
        );
        let fields = FieldExtractor::default().extract(&doc(&html)).unwrap();
        assert_eq!(fields.author.as_deref(), Some("Ade Johnson"));
        assert_eq!(fields.meta_keywords, vec!["community", "culture"]);
    }
}
