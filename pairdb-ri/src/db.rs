//! Database operations for the importer
//!
//! All writers take the run's transaction connection, so a failure at any
//! line rolls back every row the run touched.

use sqlx::SqliteConnection;

use pairdb_common::db::models::ImportRun;
use pairdb_common::Result;

use crate::record::ResultRecord;

/// Look up the id of an existing pdb row by structure code
pub async fn find_pdb_id(conn: &mut SqliteConnection, code: &str) -> Result<Option<i64>> {
    let id = sqlx::query_scalar::<_, i64>("SELECT id FROM pdb WHERE code = ?")
        .bind(code)
        .fetch_optional(&mut *conn)
        .await?;

    Ok(id)
}

/// Insert a new pdb row, returning its generated id
pub async fn insert_pdb(conn: &mut SqliteConnection, code: &str) -> Result<i64> {
    let result = sqlx::query("INSERT INTO pdb (code) VALUES (?)")
        .bind(code)
        .execute(&mut *conn)
        .await?;

    Ok(result.last_insert_rowid())
}

/// Insert one results row referencing its parent pdb row
pub async fn insert_result(
    conn: &mut SqliteConnection,
    pdb_id: i64,
    record: &ResultRecord,
) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO results (
            pdb_id, residue1, residue2, distance, angle, angle_p, angle1,
            seq1, seq2, code, resolution, chain1, chain2,
            energy_hartree, energy_kcal
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(pdb_id)
    .bind(&record.residue1)
    .bind(&record.residue2)
    .bind(record.distance)
    .bind(record.angle)
    .bind(record.angle_p)
    .bind(record.angle1)
    .bind(record.seq1)
    .bind(record.seq2)
    .bind(&record.code)
    .bind(record.resolution)
    .bind(&record.chain1)
    .bind(&record.chain2)
    .bind(record.energy_hartree)
    .bind(record.energy_kcal)
    .execute(&mut *conn)
    .await?;

    Ok(())
}

/// Record the provenance row for a completed run
pub async fn record_import_run(conn: &mut SqliteConnection, run: &ImportRun) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO import_runs (
            guid, source_path, started_at, completed_at,
            line_count, comment_count, record_count, new_pdb_count
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&run.guid)
    .bind(&run.source_path)
    .bind(&run.started_at)
    .bind(&run.completed_at)
    .bind(run.line_count)
    .bind(run.comment_count)
    .bind(run.record_count)
    .bind(run.new_pdb_count)
    .execute(&mut *conn)
    .await?;

    Ok(())
}
