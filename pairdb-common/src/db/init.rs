//! Database initialization
//!
//! Opens the database, creating the file and schema on first run. Safe to
//! call against an existing database: every statement is idempotent.

use crate::Result;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use std::path::Path;
use tracing::info;

/// Initialize database connection and create tables if needed
pub async fn init_database(db_path: &Path) -> Result<SqlitePool> {
    let newly_created = !db_path.exists();

    // Create parent directory if it doesn't exist
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    // Use sqlite options to create database if it doesn't exist
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&db_url)
        .await?;

    if newly_created {
        info!("Initialized new database: {}", db_path.display());
    } else {
        info!("Opened existing database: {}", db_path.display());
    }

    // Enforce the results -> pdb reference
    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await?;

    sqlx::query("PRAGMA journal_mode = WAL")
        .execute(&pool)
        .await?;

    sqlx::query("PRAGMA busy_timeout = 5000")
        .execute(&pool)
        .await?;

    create_pdb_table(&pool).await?;
    create_results_table(&pool).await?;
    create_import_runs_table(&pool).await?;

    Ok(pool)
}

/// Parent lookup table: one row per structure code, created on first sight
async fn create_pdb_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS pdb (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            code TEXT NOT NULL UNIQUE,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Child table: one row per imported data line
///
/// The leading columns are required by the record format; resolution, chain
/// ids and the energy columns only appear in wider (energy-annotated)
/// results files and are nullable.
async fn create_results_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS results (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            pdb_id INTEGER NOT NULL REFERENCES pdb(id),
            residue1 TEXT NOT NULL,
            residue2 TEXT NOT NULL,
            distance REAL NOT NULL,
            angle REAL NOT NULL,
            angle_p REAL NOT NULL,
            angle1 REAL NOT NULL,
            seq1 INTEGER NOT NULL,
            seq2 INTEGER NOT NULL,
            code TEXT NOT NULL,
            resolution REAL,
            chain1 TEXT,
            chain2 TEXT,
            energy_hartree REAL,
            energy_kcal REAL,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Provenance table: one row per completed import run
async fn create_import_runs_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS import_runs (
            guid TEXT PRIMARY KEY,
            source_path TEXT NOT NULL,
            started_at TEXT NOT NULL,
            completed_at TEXT NOT NULL,
            line_count INTEGER NOT NULL,
            comment_count INTEGER NOT NULL,
            record_count INTEGER NOT NULL,
            new_pdb_count INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
