//! pairdb-ri - Results Import
//!
//! Main entry point: resolve the root folder, open or create the database
//! and run one import pass over the given results file. Errors are fatal;
//! the run's transaction guarantees a failed import leaves no rows behind.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pairdb_common::config;
use pairdb_ri::importer;

/// Command-line arguments for pairdb-ri
#[derive(Parser, Debug)]
#[command(name = "pairdb-ri")]
#[command(about = "Results importer for PairDB")]
#[command(version)]
struct Args {
    /// Results file to import
    results_file: PathBuf,

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
                .unwrap_or_else(|_| "pairdb_ri=info".into()),
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

    info!("Importing {}", args.results_file.display());
    let summary = importer::import_results(&pool, &args.results_file)
        .await
        .context("Import failed")?;

    info!(
        "Imported {} records from {} lines ({} comments, {} new structures)",
        summary.records, summary.lines, summary.comments, summary.new_pdbs
    );

    Ok(())
}
