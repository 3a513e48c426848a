// Keyword classification. A deterministic, order-independent heuristic:
// identical input text must produce identical output every run.

use std::collections::HashSet;

use newswell_common::SourceCategory;

/// Category rules and tag vocabulary. Tuned to the legacy site's observed
/// content; operators substitute their own lists when the source changes.
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// `(category, keywords)` pairs scanned in order; the first rule whose
    /// keyword appears in the text wins.
    pub rules: Vec<(SourceCategory, Vec<String>)>,
    /// Domain themes tagged when they appear as substrings of the content.
    pub themes: Vec<String>,
    /// Hard cap on tags per record.
    pub max_tags: usize,
}

fn keywords(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            rules: vec![
                (SourceCategory::Listen, keywords(&["listen", "podcast", "audio"])),
                (SourceCategory::Watch, keywords(&["watch", "video", "film"])),
                (SourceCategory::Gallery, keywords(&["gallery", "photos", "images"])),
                (SourceCategory::Event, keywords(&["event", "happening", "attend"])),
                (
                    SourceCategory::Report,
                    keywords(&["report", "investigation", "findings"]),
                ),
            ],
            themes: keywords(&[
                "community",
                "culture",
                "health",
                "wellness",
                "activism",
                "liberation",
                "organizing",
                "solidarity",
                "justice",
                "pride",
                "visibility",
                "heritage",
                "housing",
                "education",
                "arts",
            ]),
            max_tags: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub category: SourceCategory,
    pub tags: Vec<String>,
}

pub struct Classifier {
    config: ClassifierConfig,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(ClassifierConfig::default())
    }
}

impl Classifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    /// Infer category and tags from title/content plus any keyword metadata
    /// the page declared. Category: first-match keyword scan over
    /// `title + content`, defaulting to `Read`. Tags: declared keywords
    /// first, then matched themes, deduplicated and capped.
    pub fn classify(
        &self,
        title: &str,
        content: &str,
        meta_keywords: &[String],
    ) -> Classification {
        let text = format!("{title} {content}").to_lowercase();

        let category = self
            .config
            .rules
            .iter()
            .find(|(_, kws)| kws.iter().any(|kw| text.contains(kw.as_str())))
            .map(|(category, _)| *category)
            .unwrap_or(SourceCategory::Read);

        let content_lower = content.to_lowercase();
        let mut seen = HashSet::new();
        let mut tags = Vec::new();
        for keyword in meta_keywords {
            let tag = keyword.trim().to_lowercase();
            if !tag.is_empty() && seen.insert(tag.clone()) {
                tags.push(tag);
            }
        }
        for theme in &self.config.themes {
            if content_lower.contains(theme.as_str()) && seen.insert(theme.clone()) {
                tags.push(theme.clone());
            }
        }
        tags.truncate(self.config.max_tags);

        Classification { category, tags }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(title: &str, content: &str) -> Classification {
        Classifier::default().classify(title, content, &[])
    }

    // --- category rules ---

    #[test]
    fn podcast_keyword_maps_to_listen() {
        let c = classify("New podcast episode", "We sat down for a chat");
        assert_eq!(c.category, SourceCategory::Listen);
    }

    #[test]
    fn rule_order_breaks_ties() {
        // Both Listen and Watch keywords present; Listen is scanned first.
        let c = classify("Podcast video special", "episode notes");
        assert_eq!(c.category, SourceCategory::Listen);
    }

    #[test]
    fn keyword_in_content_counts() {
        let c = classify("Saturday afternoon", "Come attend the street party");
        assert_eq!(c.category, SourceCategory::Event);
    }

    #[test]
    fn no_keyword_defaults_to_read() {
        let c = classify("A quiet reflection", "Some prose about nothing in particular");
        assert_eq!(c.category, SourceCategory::Read);
    }

    // --- tags ---

    #[test]
    fn themes_in_content_become_tags() {
        let c = classify(
            "A title",
            "Our community came together for health and justice",
        );
        assert_eq!(
            c.tags,
            vec!["community".to_string(), "health".to_string(), "justice".to_string()]
        );
    }

    #[test]
    fn title_themes_are_not_tagged() {
        // Tag harvest scans content only.
        let c = classify("Community pride", "Nothing thematic in the body");
        assert!(c.tags.is_empty());
    }

    #[test]
    fn meta_keywords_come_first_and_dedupe() {
        let c = Classifier::default().classify(
            "A title",
            "community organizing in practice",
            &["Organizing".to_string(), "grassroots".to_string()],
        );
        assert_eq!(
            c.tags,
            vec![
                "organizing".to_string(),
                "grassroots".to_string(),
                "community".to_string()
            ]
        );
    }

    #[test]
    fn tags_are_capped() {
        let content = "community culture health wellness activism liberation \
                       organizing solidarity justice pride visibility heritage";
        let c = classify("A title", content);
        assert_eq!(c.tags.len(), 10);
    }

    // --- determinism ---

    #[test]
    fn identical_input_gives_identical_output() {
        let title = "Gallery night photos";
        let content = "Images from the community arts showcase #Pride";
        let first = classify(title, content);
        let second = classify(title, content);
        assert_eq!(first, second);
    }
}
