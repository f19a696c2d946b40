//! Last-known-good snapshot of the merged timeline.
//!
//! Written after every successful load or save, read back only when the
//! records directory is unreachable. A missing or corrupt cache file is
//! treated as "no cache", never as an error.

use crate::errors::AppResult;
use crate::models::workout::WorkoutRecord;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedSnapshot {
    /// RFC 3339 timestamp of the save.
    pub last_sync: String,
    /// Merged timeline, newest first.
    pub records: Vec<WorkoutRecord>,
}

pub struct RecordCache {
    path: PathBuf,
}

impl RecordCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn load(&self) -> Option<CachedSnapshot> {
        let text = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&text).ok()
    }

    pub fn save(&self, records: &[WorkoutRecord]) -> AppResult<()> {
        let snapshot = CachedSnapshot {
            last_sync: Local::now().to_rfc3339(),
            records: records.to_vec(),
        };

        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&snapshot)?)?;
        Ok(())
    }

    pub fn last_sync(&self) -> Option<String> {
        self.load().map(|s| s.last_sync)
    }
}
