// External record → platform record. Pure: no I/O, deterministic output
// for deterministic input.

use newswell_archive::html_to_text;
use newswell_common::{Article, ArticleStatus, Category, SourceArticle, SourceCategory};

/// Slugs are truncated to this many characters.
pub const SLUG_MAX_CHARS: usize = 100;

/// Excerpts are truncated to this many characters before the ellipsis.
pub const EXCERPT_MAX_CHARS: usize = 200;

pub struct ArticleTransformer;

impl ArticleTransformer {
    /// Map an extracted external record into the store's article shape.
    /// Migrated records arrive as drafts pending editorial review.
    pub fn transform(source: &SourceArticle) -> Article {
        Article {
            id: None,
            title: source.title.clone(),
            slug: make_slug(&source.title),
            excerpt: make_excerpt(&html_to_text(&source.content), EXCERPT_MAX_CHARS),
            content: source.content.clone(),
            category: map_category(source.source_category),
            tags: source.tags.clone(),
            author: source.author.clone(),
            published_at: source.published_at,
            source_url: Some(source.source_url.clone()),
            status: ArticleStatus::Draft,
            location: None,
            validation_score: None,
            community_voices: 0,
            moderation_note: Some("Auto-migrated from the legacy site".to_string()),
        }
    }
}

/// Legacy section → platform category. Everything without a better home
/// lands in `Community`.
pub fn map_category(source: SourceCategory) -> Category {
    match source {
        SourceCategory::Read => Category::Community,
        SourceCategory::Listen => Category::MediaAndStorytelling,
        SourceCategory::Watch => Category::MediaAndStorytelling,
        SourceCategory::Gallery => Category::ArtsAndCulture,
        SourceCategory::Event => Category::Community,
        SourceCategory::Report => Category::HistoryAndCulture,
    }
}

/// Lowercase, collapse non-alphanumeric runs to one `-`, trim separators
/// from both ends, truncate.
pub fn make_slug(title: &str) -> String {
    let mut slug = String::new();
    let mut pending_sep = false;
    for ch in title.to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_sep && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(ch);
            pending_sep = false;
        } else {
            pending_sep = true;
        }
    }
    slug.chars().take(SLUG_MAX_CHARS).collect()
}

/// Fixed-length plain-text prefix. When truncation lands mid-word, back off
/// to the last whitespace boundary if it sits past 80% of the limit, then
/// append an ellipsis.
pub fn make_excerpt(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_chars {
        return text.to_string();
    }
    let truncated = &chars[..max_chars];
    let kept: String = match truncated
        .iter()
        .rposition(|c| *c == ' ')
        .filter(|&pos| pos > max_chars * 4 / 5)
    {
        Some(pos) => truncated[..pos].iter().collect(),
        None => truncated.iter().collect(),
    };
    format!("{kept}...")
}
