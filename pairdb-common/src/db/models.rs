//! Database models

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A row of the parent lookup table of structure codes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PdbEntry {
    pub id: i64,
    pub code: String,
}

/// Provenance record for one import run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportRun {
    pub guid: String,
    pub source_path: String,
    pub started_at: String,
    pub completed_at: String,
    pub line_count: i64,
    pub comment_count: i64,
    pub record_count: i64,
    pub new_pdb_count: i64,
}

impl ImportRun {
    /// Open a provenance record for a run starting now
    pub fn begin(source_path: String) -> Self {
        Self {
            guid: Uuid::new_v4().to_string(),
            source_path,
            started_at: Utc::now().to_rfc3339(),
            completed_at: String::new(),
            line_count: 0,
            comment_count: 0,
            record_count: 0,
            new_pdb_count: 0,
        }
    }

    /// Close the record with the run's final counts
    pub fn complete(&mut self, lines: i64, comments: i64, records: i64, new_pdbs: i64) {
        self.completed_at = Utc::now().to_rfc3339();
        self.line_count = lines;
        self.comment_count = comments;
        self.record_count = records;
        self.new_pdb_count = new_pdbs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_stamps_guid_and_start_time() {
        let run = ImportRun::begin("/tmp/results.csv".to_string());
        assert_eq!(run.guid.len(), 36);
        assert!(!run.started_at.is_empty());
        assert!(run.completed_at.is_empty());
    }

    #[test]
    fn test_complete_records_counts() {
        let mut run = ImportRun::begin("/tmp/results.csv".to_string());
        run.complete(10, 2, 8, 3);
        assert!(!run.completed_at.is_empty());
        assert_eq!(run.line_count, 10);
        assert_eq!(run.comment_count, 2);
        assert_eq!(run.record_count, 8);
        assert_eq!(run.new_pdb_count, 3);
    }
}
