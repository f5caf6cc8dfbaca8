//! Aggregate reporting over imported results
//!
//! One line per structure: how many pair interactions were recorded against
//! it, the closest and mean contact distances, and the summed interaction
//! energy where the input carried energy columns.

use sqlx::{Row, SqlitePool};

use pairdb_common::Result;

/// Per-structure aggregate row
#[derive(Debug, Clone, PartialEq)]
pub struct StructureSummary {
    pub code: String,
    pub interactions: i64,
    pub min_distance: f64,
    pub mean_distance: f64,
    /// None when no imported row for this structure carried energy columns
    pub total_energy_kcal: Option<f64>,
}

/// Aggregate all imported results, one row per structure code
pub async fn structure_summaries(pool: &SqlitePool) -> Result<Vec<StructureSummary>> {
    let rows = sqlx::query(
        r#"
        SELECT
            pdb.code AS code,
            COUNT(results.id) AS interactions,
            MIN(results.distance) AS min_distance,
            AVG(results.distance) AS mean_distance,
            SUM(results.energy_kcal) AS total_energy_kcal
        FROM results
        JOIN pdb ON results.pdb_id = pdb.id
        GROUP BY pdb.code
        ORDER BY pdb.code
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| StructureSummary {
            code: row.get("code"),
            interactions: row.get("interactions"),
            min_distance: row.get("min_distance"),
            mean_distance: row.get("mean_distance"),
            total_energy_kcal: row.get("total_energy_kcal"),
        })
        .collect())
}

/// Render summaries as an aligned text table with a totals line
pub fn render_table(summaries: &[StructureSummary]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<8} {:>12} {:>10} {:>10} {:>14}\n",
        "code", "interactions", "min dist", "mean dist", "energy (kcal)"
    ));

    for summary in summaries {
        let energy = summary
            .total_energy_kcal
            .map(|kcal| format!("{:.3}", kcal))
            .unwrap_or_else(|| "-".to_string());
        out.push_str(&format!(
            "{:<8} {:>12} {:>10.3} {:>10.3} {:>14}\n",
            summary.code, summary.interactions, summary.min_distance, summary.mean_distance, energy
        ));
    }

    let total: i64 = summaries.iter().map(|s| s.interactions).sum();
    out.push_str(&format!(
        "{} structures, {} interactions\n",
        summaries.len(),
        total
    ));

    out
}
