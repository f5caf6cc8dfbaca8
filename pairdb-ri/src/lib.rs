//! pairdb-ri - Results Import
//!
//! One-shot batch importer for pair-interaction results files: one parent
//! `pdb` row per structure code (created on first sight), one `results` row
//! per data line, one `import_runs` provenance row per completed run.

pub mod db;
pub mod importer;
pub mod record;
