use std::env;

/// Pipeline configuration. Tunables default to the values the legacy site
/// was migrated with; `from_env` overrides them from the environment.
#[derive(Debug, Clone)]
pub struct MigrationConfig {
    /// Base URL of the external site to discover articles from.
    pub base_url: String,
    /// Upper bound on candidate links taken from one discovery pass.
    pub max_discovered_links: usize,
    /// Records per import batch.
    pub batch_size: usize,
    /// Pause between successive batches, milliseconds.
    pub batch_delay_ms: u64,
    /// Byline used when a page exposes no author.
    pub fallback_author: String,
}

impl MigrationConfig {
    pub fn for_site(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            max_discovered_links: 50,
            batch_size: 10,
            batch_delay_ms: 100,
            fallback_author: "Newswell Editorial".to_string(),
        }
    }

    /// Load configuration from environment variables.
    /// Panics with a clear message if required vars are missing.
    pub fn from_env() -> Self {
        let mut config = Self::for_site(&required_env("SOURCE_BASE_URL"));
        if let Ok(v) = env::var("MAX_DISCOVERED_LINKS") {
            config.max_discovered_links = v
                .parse()
                .expect("MAX_DISCOVERED_LINKS must be a number");
        }
        if let Ok(v) = env::var("BATCH_SIZE") {
            config.batch_size = v.parse().expect("BATCH_SIZE must be a number");
        }
        if let Ok(v) = env::var("BATCH_DELAY_MS") {
            config.batch_delay_ms = v.parse().expect("BATCH_DELAY_MS must be a number");
        }
        if let Ok(v) = env::var("FALLBACK_AUTHOR") {
            config.fallback_author = v;
        }
        config
    }
}

fn required_env(key: &str) -> String {
    env::var(key).unwrap_or_else(|_| panic!("{key} environment variable is required"))
}
