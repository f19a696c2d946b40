//! Directory-backed gateway.
//!
//! Revisions are content hashes: a file's revision token is the blake3
//! hex digest of its bytes. Comparing the caller's token against a fresh
//! hash of what is on disk gives compare-and-swap semantics without any
//! extra bookkeeping files.

use crate::errors::{AppError, AppResult};
use crate::store::gateway::{ContentGateway, FileSnapshot};
use chrono::Local;
use regex::Regex;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

/// Revision token for file content.
pub fn content_revision(content: &str) -> String {
    hex::encode(blake3::hash(content.as_bytes()).as_bytes())
}

/// Short form used in journal lines and messages.
pub fn short_revision(rev: &str) -> &str {
    rev.get(..12).unwrap_or(rev)
}

pub struct DirGateway {
    root: PathBuf,
    journal: Option<PathBuf>,
}

impl DirGateway {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            journal: None,
        }
    }

    /// Record every successful write as a line in the given journal file.
    pub fn with_journal(mut self, path: impl Into<PathBuf>) -> Self {
        self.journal = Some(path.into());
        self
    }

    /// Years that have a record file in the directory, ascending.
    pub fn list_years(&self) -> AppResult<Vec<i32>> {
        self.ensure_root()?;

        let re = Regex::new(r"^records_(\d{4})\.txt$").unwrap();
        let mut years = Vec::new();

        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            let name = entry.file_name();
            if let Some(caps) = re.captures(&name.to_string_lossy())
                && let Ok(year) = caps[1].parse()
            {
                years.push(year);
            }
        }

        years.sort_unstable();
        Ok(years)
    }

    fn ensure_root(&self) -> AppResult<()> {
        if self.root.is_dir() {
            Ok(())
        } else {
            Err(AppError::GatewayUnavailable(format!(
                "directory not found: {}",
                self.root.display()
            )))
        }
    }

    /// Append one journal line: date, operation, target, revision, message.
    fn journal_append(
        &self,
        operation: &str,
        target: &str,
        revision: &str,
        message: &str,
    ) -> std::io::Result<()> {
        let Some(journal) = &self.journal else {
            return Ok(());
        };

        if let Some(dir) = journal.parent() {
            fs::create_dir_all(dir)?;
        }

        let mut file = OpenOptions::new().create(true).append(true).open(journal)?;
        writeln!(
            file,
            "{}\t{}\t{}\t{}\t{}",
            Local::now().to_rfc3339(),
            operation,
            target,
            short_revision(revision),
            message
        )
    }
}

impl ContentGateway for DirGateway {
    fn fetch_file(&self, path: &str) -> AppResult<FileSnapshot> {
        self.ensure_root()?;

        match fs::read_to_string(self.root.join(path)) {
            Ok(content) => {
                let revision = Some(content_revision(&content));
                Ok(FileSnapshot { content, revision })
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(FileSnapshot {
                content: String::new(),
                revision: None,
            }),
            Err(e) => Err(e.into()),
        }
    }

    fn update_file(
        &mut self,
        path: &str,
        content: &str,
        message: &str,
        revision: Option<&str>,
    ) -> AppResult<String> {
        self.ensure_root()?;
        let file = self.root.join(path);

        // revision of what is on disk right now
        let current = match fs::read_to_string(&file) {
            Ok(text) => Some(content_revision(&text)),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => return Err(e.into()),
        };

        if current.as_deref() != revision {
            return Err(AppError::Conflict {
                path: path.to_string(),
            });
        }

        fs::write(&file, content)?;
        let new_revision = content_revision(content);

        let operation = if current.is_some() { "update" } else { "create" };
        if let Err(e) = self.journal_append(operation, path, &new_revision, message) {
            eprintln!("⚠️  Failed to write journal entry: {}", e);
        }

        Ok(new_revision)
    }
}
