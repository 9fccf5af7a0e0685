use serde::{Deserialize, Serialize};

/// Summary of a finished (or dry) job run.
///
/// Returned by the functions in [`crate::jobs`]; the counts reflect what was
/// parsed and, for the write paths, what ended up on disk after any country
/// filter was applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobStats {
    /// Data rows parsed, comments and skipped blank lines excluded. For the
    /// city job, rows of filtered-out countries are excluded too.
    pub records: usize,
    /// Distinct country codes, case-insensitive (city job), or distinct ids
    /// (mapping job).
    pub groups: usize,
    /// JSON files written; zero for inspection runs.
    pub files_written: usize,
}
