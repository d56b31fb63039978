//! Schema-only command: create the catalog tables and exit

use anyhow::{Context, Result};
use clap::Parser;

use libcat_server::db;

use super::StoreArgs;

/// Arguments for the init-db command
#[derive(Parser, Debug)]
pub struct InitDbArgs {
    #[command(flatten)]
    pub store: StoreArgs,
}

/// Create the books, members, and transactions tables if missing
pub async fn run_init_db(args: InitDbArgs) -> Result<()> {
    let catalog = db::connect(&args.store.catalog_config())
        .await
        .context("Failed to open catalog store")?;

    catalog
        .init_schema()
        .await
        .context("Error initializing database")?;

    println!("Database initialized successfully using {}", catalog.dialect());
    Ok(())
}
