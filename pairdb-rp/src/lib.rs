//! pairdb-rp - Report
//!
//! Read-only aggregate reporting over the imported results.

pub mod report;
