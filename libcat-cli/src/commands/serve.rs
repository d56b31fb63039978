//! HTTP server command
//!
//! Resolves the catalog store, ensures the schema, and serves the API plus
//! the static front-end until shutdown.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use libcat_server::db;
use libcat_server::http::{run_server, ServerConfig};

use super::StoreArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "0.0.0.0:5000")]
    pub bind: SocketAddr,

    /// Directory holding index.html and other front-end assets.
    /// Every file under it is served, so keep library.db and .env elsewhere
    /// when exposing the server.
    #[arg(long, default_value = ".")]
    pub static_dir: PathBuf,

    #[command(flatten)]
    pub store: StoreArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let catalog = db::connect(&args.store.catalog_config())
        .await
        .context("Failed to open catalog store")?;

    // Schema failures are logged, not fatal
    db::ensure_schema(&catalog).await;

    let config = ServerConfig {
        bind_addr: args.bind,
        static_dir: args.static_dir,
    };

    run_server(catalog, config).await.context("Server error")?;

    Ok(())
}
