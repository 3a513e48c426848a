use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Editorial section of the legacy source site.
/// Assigned by keyword classification when the page itself doesn't say.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SourceCategory {
    Read,
    Listen,
    Watch,
    Gallery,
    Event,
    Report,
}

/// The platform's closed category enumeration. Every imported record lands
/// in exactly one of these buckets; unknown external categories map to
/// `Community`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Community,
    MediaAndStorytelling,
    ArtsAndCulture,
    HistoryAndCulture,
    Organizing,
    HealthAndWellness,
}

impl Category {
    /// Human-readable label as it appears in the newsroom UI.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Community => "Community",
            Category::MediaAndStorytelling => "Media & Storytelling",
            Category::ArtsAndCulture => "Arts & Culture",
            Category::HistoryAndCulture => "History & Culture",
            Category::Organizing => "Organizing",
            Category::HealthAndWellness => "Health & Wellness",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    Draft,
    Published,
    Archived,
}

/// A record discovered on the external site, after field extraction and
/// classification. Held only for the duration of a run: transformed into an
/// [`Article`] on success, dropped on extraction failure. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceArticle {
    pub title: String,
    /// Cleaned article markup (scripts, styles and ad blocks removed).
    pub content: String,
    pub published_at: DateTime<Utc>,
    /// Canonical URL of the page. Stable identity used for deduplication.
    pub source_url: String,
    pub featured_image: Option<String>,
    pub author: String,
    pub source_category: SourceCategory,
    pub tags: Vec<String>,
    pub hashtags: Vec<String>,
}

/// The platform's canonical article/story shape, as the store holds it.
/// `id` is assigned by the store on insert. `source_url`, when present, is
/// unique across migrated records and serves as the dedup key. Records are
/// never mutated after import by this subsystem.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub id: Option<Uuid>,
    pub title: String,
    /// URL-safe slug, derived deterministically from the title.
    pub slug: String,
    /// Word-boundary-safe summary of the content.
    pub excerpt: String,
    pub content: String,
    pub category: Category,
    pub tags: Vec<String>,
    pub author: String,
    pub published_at: DateTime<Utc>,
    pub source_url: Option<String>,
    pub status: ArticleStatus,
    /// Free-text location, used for geographic diversity scoring.
    pub location: Option<String>,
    /// Community validation score on a 0-5 scale, curated records only.
    pub validation_score: Option<f32>,
    pub community_voices: u32,
    pub moderation_note: Option<String>,
}

/// A record that could not be inserted, with the store's reason.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailedImport {
    pub article: Article,
    pub reason: String,
}

/// Outcome of one fixed-size import batch.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct BatchResult {
    pub attempted: u32,
    pub imported: Vec<Article>,
    pub skipped: Vec<Article>,
    pub failed: Vec<FailedImport>,
}

/// Aggregated outcome of a full migration run.
///
/// `success` reflects batch-level fatalities only: individual fetch,
/// extraction, or insert failures are itemized but do not flip it.
/// Invariant: `processed == imported + skipped + failed + extraction_errors`.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MigrationReport {
    pub success: bool,
    /// Candidate documents that were fetched and entered extraction.
    pub processed: u32,
    pub imported: Vec<Article>,
    pub skipped: Vec<Article>,
    pub failed: Vec<FailedImport>,
    pub extraction_errors: u32,
    pub errors: Vec<String>,
}

impl MigrationReport {
    pub fn empty_success() -> Self {
        Self {
            success: true,
            ..Self::default()
        }
    }
}

impl std::fmt::Display for MigrationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "\n=== Migration Complete ===")?;
        writeln!(f, "Success:            {}", self.success)?;
        writeln!(f, "Processed:          {}", self.processed)?;
        writeln!(f, "Imported:           {}", self.imported.len())?;
        writeln!(f, "Skipped duplicates: {}", self.skipped.len())?;
        writeln!(f, "Failed inserts:     {}", self.failed.len())?;
        writeln!(f, "Extraction errors:  {}", self.extraction_errors)?;
        if !self.errors.is_empty() {
            writeln!(f, "\nErrors:")?;
            for e in &self.errors {
                writeln!(f, "  - {e}")?;
            }
        }
        Ok(())
    }
}

/// Outcome of a curated population run.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct PopulationReport {
    pub success: bool,
    pub stories_added: u32,
    pub categories_covered: Vec<Category>,
    pub locations_covered: Vec<String>,
    pub total_community_voices: u32,
    pub avg_validation_score: f32,
    pub errors: Vec<String>,
}

impl std::fmt::Display for PopulationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "\n=== Population Complete ===")?;
        writeln!(f, "Stories added:      {}", self.stories_added)?;
        let categories: Vec<&str> = self.categories_covered.iter().map(|c| c.label()).collect();
        writeln!(f, "Categories covered: {}", categories.join(", "))?;
        writeln!(f, "Locations covered:  {}", self.locations_covered.join(", "))?;
        writeln!(f, "Community voices:   {}", self.total_community_voices)?;
        writeln!(f, "Avg validation:     {:.1}", self.avg_validation_score)?;
        if !self.errors.is_empty() {
            writeln!(f, "\nErrors:")?;
            for e in &self.errors {
                writeln!(f, "  - {e}")?;
            }
        }
        Ok(())
    }
}

/// Quality assessment of the current content population. Recomputed on
/// demand from aggregate statistics; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityReport {
    pub is_valid: bool,
    /// Weighted 0-100 score across count, diversity and validation metrics.
    pub score: u8,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
}

impl std::fmt::Display for QualityReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "\n=== Quality Report ===")?;
        writeln!(f, "Valid: {}", self.is_valid)?;
        writeln!(f, "Score: {}/100", self.score)?;
        for issue in &self.issues {
            writeln!(f, "  issue: {issue}")?;
        }
        for rec in &self.recommendations {
            writeln!(f, "  recommend: {rec}")?;
        }
        Ok(())
    }
}
