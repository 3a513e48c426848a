//! PopulationService — the curated-seed workflow.
//!
//! Same discipline as migration (dedup, fixed-size batches, structured
//! report), but the records come from a curated set instead of a scrape,
//! and the service can score the resulting content population.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use newswell_common::quality::*;
use newswell_common::{Article, Category, PopulationReport, QualityReport};
use newswell_store::{RecordFilter, Repository, Result as StoreResult};

use crate::import::{BatchImporter, ImportConfig};
use crate::seed;

#[derive(Debug, Clone)]
pub struct PopulateOptions {
    /// Delete every stored record before seeding.
    pub clear_existing: bool,
    pub batch_size: usize,
}

impl Default for PopulateOptions {
    fn default() -> Self {
        Self {
            clear_existing: false,
            batch_size: 10,
        }
    }
}

pub struct PopulationService {
    repo: Arc<dyn Repository>,
    stories: Vec<Article>,
}

impl PopulationService {
    pub fn new(repo: Arc<dyn Repository>) -> Self {
        Self {
            repo,
            stories: seed::curated_stories(),
        }
    }

    /// Use a caller-supplied record set instead of the built-in seeds.
    pub fn with_stories(repo: Arc<dyn Repository>, stories: Vec<Article>) -> Self {
        Self { repo, stories }
    }

    /// Seed the curated set in batches. Records whose slug already exists
    /// are filtered out up front; the rest go through the shared batch
    /// importer. All outcomes land in the report; nothing propagates.
    pub async fn populate(&self, options: &PopulateOptions) -> PopulationReport {
        let mut report = PopulationReport::default();

        if options.clear_existing {
            match self.repo.delete(&RecordFilter::All).await {
                Ok(removed) => info!(removed, "Cleared existing stories"),
                Err(e) => {
                    report
                        .errors
                        .push(format!("failed to clear existing stories: {e}"));
                    return report;
                }
            }
        }

        let existing_slugs: HashSet<String> = match self.repo.select(&RecordFilter::All).await {
            Ok(articles) => articles.into_iter().map(|a| a.slug).collect(),
            Err(e) => {
                report
                    .errors
                    .push(format!("failed to read existing stories: {e}"));
                return report;
            }
        };

        let to_add: Vec<Article> = self
            .stories
            .iter()
            .filter(|s| !existing_slugs.contains(&s.slug))
            .cloned()
            .collect();
        info!(
            new = to_add.len(),
            existing = existing_slugs.len(),
            "Curated stories to add"
        );

        if to_add.is_empty() {
            report.success = true;
            return report;
        }

        let importer = BatchImporter::new(
            self.repo.clone(),
            ImportConfig {
                batch_size: options.batch_size,
                batch_delay: Duration::from_millis(100),
            },
        );
        let summary = importer.import_all(&to_add).await;

        report.stories_added = summary.imported.len() as u32;
        let mut scores = Vec::new();
        for story in &summary.imported {
            if !report.categories_covered.contains(&story.category) {
                report.categories_covered.push(story.category);
            }
            if let Some(location) = &story.location {
                if !report.locations_covered.contains(location) {
                    report.locations_covered.push(location.clone());
                }
            }
            report.total_community_voices += story.community_voices;
            if let Some(score) = story.validation_score {
                scores.push(score);
            }
        }
        if !scores.is_empty() {
            report.avg_validation_score = scores.iter().sum::<f32>() / scores.len() as f32;
        }

        report.errors.extend(
            summary
                .failed
                .iter()
                .map(|f| format!("failed to add \"{}\": {}", f.article.title, f.reason)),
        );
        report.errors.extend(summary.batch_errors);
        report.success = report.errors.is_empty();

        info!("{report}");
        report
    }

    /// Recompute aggregate statistics over the stored population and score
    /// them against the configured minimums. Read-only; no side effects.
    pub async fn validate_quality(&self) -> StoreResult<QualityReport> {
        let stories = self.repo.select(&RecordFilter::All).await?;

        let total = stories.len();
        let categories: HashSet<Category> = stories.iter().map(|s| s.category).collect();
        let locations: HashSet<&str> = stories
            .iter()
            .filter_map(|s| s.location.as_deref())
            .collect();
        let scores: Vec<f32> = stories.iter().filter_map(|s| s.validation_score).collect();
        let avg_score = if scores.is_empty() {
            0.0
        } else {
            scores.iter().sum::<f32>() / scores.len() as f32
        };
        let voices: u32 = stories.iter().map(|s| s.community_voices).sum();

        let mut is_valid = true;
        let mut issues = Vec::new();
        let mut recommendations = Vec::new();

        if total < MIN_STORY_COUNT {
            issues.push(format!(
                "only {total} stories (minimum {MIN_STORY_COUNT} recommended)"
            ));
            is_valid = false;
        }
        if categories.len() < MIN_CATEGORY_DIVERSITY {
            issues.push(format!(
                "only {} categories covered (minimum {MIN_CATEGORY_DIVERSITY} recommended)",
                categories.len()
            ));
            is_valid = false;
        }
        if locations.len() < MIN_LOCATION_DIVERSITY {
            issues.push(format!(
                "only {} locations covered (minimum {MIN_LOCATION_DIVERSITY} recommended)",
                locations.len()
            ));
            recommendations.push("Add stories from more regions".to_string());
        }
        if !scores.is_empty() && avg_score < MIN_AVG_VALIDATION_SCORE {
            issues.push(format!(
                "average validation score {avg_score:.1} too low"
            ));
            recommendations.push("Review story quality and community validation".to_string());
        }

        let score = (total as f32 / STORY_COUNT_TARGET).min(1.0) * STORY_COUNT_WEIGHT
            + (categories.len() as f32 / CATEGORY_TARGET).min(1.0) * CATEGORY_WEIGHT
            + (locations.len() as f32 / LOCATION_TARGET).min(1.0) * LOCATION_WEIGHT
            + (avg_score / VALIDATION_TARGET).min(1.0) * VALIDATION_WEIGHT
            + (voices as f32 / VOICES_TARGET).min(1.0) * VOICES_WEIGHT;

        Ok(QualityReport {
            is_valid,
            score: score.round() as u8,
            issues,
            recommendations,
        })
    }
}
