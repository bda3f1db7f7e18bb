//! Line-delimited JSON store for task records.
//!
//! `load` and `append` work line by line; close and remove re-materialize
//! the whole file through `rewrite_all`, since line-delimited JSON has no
//! in-place update primitive. The rewrite goes through a temp file in the
//! ledger directory and is renamed over the store, so a crash mid-rewrite
//! never leaves a truncated file behind.
//!
//! The store is not locked. Exactly one process is assumed to touch the
//! ledger at a time: interleaved appends are independent writes, but a
//! rewrite racing any other writer can drop or duplicate records.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::task::Task;

/// File-backed task store
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(config: &Config) -> Self {
        Self {
            path: config.task_file.clone(),
        }
    }

    /// Path to the store file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every record, in file order
    ///
    /// Each line is parsed independently; the first malformed line fails
    /// the whole load with its 1-based line number.
    pub fn load(&self) -> Result<Vec<Task>> {
        let file = self.open_existing()?;
        let reader = BufReader::new(file);

        let mut tasks = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let task: Task = serde_json::from_str(&line).map_err(|source| Error::ParseLine {
                line: idx + 1,
                source,
            })?;
            tasks.push(task);
        }
        tracing::debug!(count = tasks.len(), "loaded task records");
        Ok(tasks)
    }

    /// Append one record without disturbing existing contents
    ///
    /// Creates the ledger directory and the store file on first use.
    pub fn append(&self, task: &Task) -> Result<()> {
        self.ensure_dir()?;

        let json = serde_json::to_string(task)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{json}")?;
        file.sync_all()?;
        Ok(())
    }

    /// Replace the whole store with the given records, in the given order
    pub fn rewrite_all(&self, tasks: &[Task]) -> Result<()> {
        self.ensure_dir()?;

        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        let mut tmp = NamedTempFile::new_in(dir)?;
        for task in tasks {
            let json = serde_json::to_string(task)?;
            writeln!(tmp, "{json}")?;
        }
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|err| Error::Io(err.error))?;
        tracing::debug!(count = tasks.len(), "rewrote store");
        Ok(())
    }

    /// Verbatim file lines, no parsing
    pub fn raw_lines(&self) -> Result<Vec<String>> {
        let file = self.open_existing()?;
        let reader = BufReader::new(file);

        let mut lines = Vec::new();
        for line in reader.lines() {
            lines.push(line?);
        }
        Ok(lines)
    }

    fn open_existing(&self) -> Result<File> {
        File::open(&self.path).map_err(|_| Error::StoreMissing(self.path.clone()))
    }

    fn ensure_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}
