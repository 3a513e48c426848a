pub mod document;
pub mod extract;
pub mod fetch;
pub mod links;
pub mod text;

pub use document::Document;
pub use extract::{ExtractedFields, ExtractorConfig, FieldExtractor, Strategy, ValueSource};
pub use fetch::{ArchiveError, DocumentFetcher, FetchedDocument, HttpFetcher, Result};
pub use links::discover_article_links;
pub use text::{extract_hashtags, html_to_text};
