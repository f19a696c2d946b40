//! Content gateway contract.
//!
//! The store never touches files directly; everything goes through this
//! trait so the record directory can live anywhere a backend can reach
//! (a plain directory today, a hosted repository behind the same shape).

use crate::errors::AppResult;

/// A fetched file plus the revision token it was read at.
#[derive(Debug, Clone, PartialEq)]
pub struct FileSnapshot {
    pub content: String,
    /// None means the file does not exist yet. That is a normal state
    /// for a year with no workouts, not an error.
    pub revision: Option<String>,
}

pub trait ContentGateway {
    /// Read a file. Missing files come back as an empty snapshot with
    /// no revision.
    fn fetch_file(&self, path: &str) -> AppResult<FileSnapshot>;

    /// Write a file, guarded by the revision the caller last read.
    /// Pass None when the file is expected to not exist yet. A stale or
    /// wrong revision fails with `AppError::Conflict` and writes nothing.
    /// Returns the new revision on success.
    fn update_file(
        &mut self,
        path: &str,
        content: &str,
        message: &str,
        revision: Option<&str>,
    ) -> AppResult<String>;
}

/// File name for one year shard, e.g. "records_2026.txt".
pub fn year_file(year: i32) -> String {
    format!("records_{}.txt", year)
}
