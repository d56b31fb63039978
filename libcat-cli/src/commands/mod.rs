//! Subcommand implementations

pub mod init_db;
pub mod serve;

use std::path::PathBuf;

use clap::Args;
use libcat_server::config::DEFAULT_SQLITE_PATH;
use libcat_server::CatalogConfig;

/// Store selection shared by every subcommand
#[derive(Args, Debug, Clone)]
pub struct StoreArgs {
    /// PostgreSQL connection string; SQLite is used when unset or unreachable
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// SQLite database file for the embedded store
    #[arg(long, default_value = DEFAULT_SQLITE_PATH)]
    pub sqlite_path: PathBuf,
}

impl StoreArgs {
    pub fn catalog_config(&self) -> CatalogConfig {
        let config = CatalogConfig::embedded().with_sqlite_path(&self.sqlite_path);

        match self.database_url.as_deref().filter(|url| !url.is_empty()) {
            Some(url) => config.with_database_url(url),
            None => config,
        }
    }
}
