pub mod config;
pub mod quality;
pub mod types;

pub use config::MigrationConfig;
pub use types::*;
