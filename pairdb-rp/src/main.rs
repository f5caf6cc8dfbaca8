//! pairdb-rp - Report
//!
//! Main entry point: resolve the root folder, open the database and print
//! the per-structure aggregate summary to stdout.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pairdb_common::config;
use pairdb_rp::report;

/// Command-line arguments for pairdb-rp
#[derive(Parser, Debug)]
#[command(name = "pairdb-rp")]
#[command(about = "Aggregate report over imported PairDB results")]
#[command(version)]
struct Args {
    /// Root folder holding the PairDB database
    #[arg(short, long, env = "PAIRDB_ROOT_FOLDER")]
    root_folder: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pairdb_rp=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse command-line arguments
    let args = Args::parse();

    let root_folder = config::resolve_root_folder(args.root_folder.as_deref());
    let db_path = config::database_path(&root_folder);
    info!("Database: {}", db_path.display());

    let pool = pairdb_common::db::init_database(&db_path)
        .await
        .context("Failed to initialize database")?;

    let summaries = report::structure_summaries(&pool)
        .await
        .context("Failed to aggregate results")?;

    print!("{}", report::render_table(&summaries));

    Ok(())
}
