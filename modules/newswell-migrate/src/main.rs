//! Operator tool for the migration pipeline.
//!
//! Runs against an in-memory store, so `discover` and `dry-run` inspect the
//! legacy site without touching production data; host applications drive the
//! library against their own Repository for the real thing.

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use newswell_archive::HttpFetcher;
use newswell_common::MigrationConfig;
use newswell_migrate::{MigrationOrchestrator, PopulateOptions, PopulationService};
use newswell_store::MemoryRepository;

#[derive(Parser)]
#[command(name = "newswell-migrate", about = "Newswell content migration operator tool")]
struct Cli {
    /// Emit reports as JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List candidate articles on the legacy site without importing
    Discover {
        /// Legacy site base URL (falls back to SOURCE_BASE_URL)
        #[arg(long)]
        base_url: Option<String>,
    },
    /// Run the full migration state machine against an in-memory store
    DryRun {
        /// Legacy site base URL (falls back to SOURCE_BASE_URL)
        #[arg(long)]
        base_url: Option<String>,
    },
    /// Seed the curated story set into an in-memory store and score it
    Seed {
        #[arg(long, default_value_t = 10)]
        batch_size: usize,
    },
}

fn load_config(base_url: Option<String>) -> MigrationConfig {
    match base_url {
        Some(url) => MigrationConfig::for_site(&url),
        None => MigrationConfig::from_env(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("newswell=info".parse()?))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Discover { base_url } => {
            let config = load_config(base_url);
            let mut orchestrator = MigrationOrchestrator::new(
                Arc::new(HttpFetcher::new()),
                Arc::new(MemoryRepository::new()),
                config,
            );
            let articles = orchestrator.discover().await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&articles)?);
            } else {
                for article in &articles {
                    println!(
                        "{:?}\t{}\t{}",
                        article.source_category, article.title, article.source_url
                    );
                }
                println!("\n{} candidate articles", articles.len());
            }
        }
        Commands::DryRun { base_url } => {
            let config = load_config(base_url);
            let mut orchestrator = MigrationOrchestrator::new(
                Arc::new(HttpFetcher::new()),
                Arc::new(MemoryRepository::new()),
                config,
            );
            let report = orchestrator.run().await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{report}");
            }
        }
        Commands::Seed { batch_size } => {
            let repo = Arc::new(MemoryRepository::new());
            let service = PopulationService::new(repo);
            let report = service
                .populate(&PopulateOptions {
                    clear_existing: false,
                    batch_size,
                })
                .await;
            let quality = service.validate_quality().await?;
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "population": report,
                        "quality": quality,
                    }))?
                );
            } else {
                println!("{report}");
                println!("{quality}");
            }
        }
    }

    info!("Done");
    Ok(())
}
