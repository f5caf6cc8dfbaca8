//! Single-pass import of a results file
//!
//! The file is read once, front to back. Comment lines are skipped, every
//! other line is parsed, its parent pdb row resolved (created on first
//! sight of a new code) and one results row inserted. The whole run
//! executes inside one transaction: a failure at any line rolls back every
//! write, including the provenance row.

use std::path::Path;

use sqlx::{SqliteConnection, SqlitePool};
use tracing::debug;

use pairdb_common::db::models::{ImportRun, PdbEntry};
use pairdb_common::Result;

use crate::db;
use crate::record::ResultRecord;

/// Counts reported by a completed import run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub lines: usize,
    pub comments: usize,
    pub records: usize,
    pub new_pdbs: usize,
}

/// Import one results file into the database
///
/// The parent row is looked up (or created) only when a line's structure
/// code differs from the previous data line's; a run of lines from the
/// same structure reuses the resolved id without touching the store.
pub async fn import_results(pool: &SqlitePool, path: &Path) -> Result<ImportSummary> {
    let mut run = ImportRun::begin(path.display().to_string());
    let contents = std::fs::read_to_string(path)?;

    let mut tx = pool.begin().await?;

    let mut summary = ImportSummary {
        lines: 0,
        comments: 0,
        records: 0,
        new_pdbs: 0,
    };
    let mut current: Option<PdbEntry> = None;

    for (index, line) in contents.lines().enumerate() {
        let line_no = index + 1;
        summary.lines += 1;

        if line.starts_with('#') {
            summary.comments += 1;
            continue;
        }

        let record = ResultRecord::parse(line_no, line)?;

        let entry = match current.take() {
            Some(entry) if entry.code == record.pdb_code => entry,
            _ => resolve_pdb(&mut tx, &record.pdb_code, &mut summary).await?,
        };

        db::insert_result(&mut tx, entry.id, &record).await?;
        summary.records += 1;
        current = Some(entry);
    }

    run.complete(
        summary.lines as i64,
        summary.comments as i64,
        summary.records as i64,
        summary.new_pdbs as i64,
    );
    db::record_import_run(&mut tx, &run).await?;

    tx.commit().await?;

    Ok(summary)
}

/// Look up a structure code, inserting the parent row on first sight
async fn resolve_pdb(
    conn: &mut SqliteConnection,
    code: &str,
    summary: &mut ImportSummary,
) -> Result<PdbEntry> {
    match db::find_pdb_id(conn, code).await? {
        Some(id) => {
            debug!("Structure {} already known as pdb id {}", code, id);
            Ok(PdbEntry {
                id,
                code: code.to_string(),
            })
        }
        None => {
            let id = db::insert_pdb(conn, code).await?;
            summary.new_pdbs += 1;
            debug!("Inserted structure {} as pdb id {}", code, id);
            Ok(PdbEntry {
                id,
                code: code.to_string(),
            })
        }
    }
}
