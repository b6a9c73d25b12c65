// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! On-disk history
//!
//! History is stored as a pretty-printed JSON array of records in store
//! order. Writes go to a temporary sibling file that is then renamed over
//! the target, so readers see either the old list or the new one.
//!
//! [`HistoryWriter`] moves those writes off the caller's path: callers
//! submit snapshots and continue, and the writer task persists the most
//! recent one. Snapshots submitted while a write is in flight are coalesced.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::error::{CodesmithError, Result};

use super::record::HistoryRecord;
use super::store::HistoryStore;

/// Location of the history JSON file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryFile {
    path: PathBuf,
}

impl HistoryFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the store. A missing file is an empty history; a file that does
    /// not parse is logged and treated as empty.
    pub fn load(&self) -> Result<HistoryStore> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(HistoryStore::new()),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str::<Vec<HistoryRecord>>(&content) {
            Ok(records) => {
                tracing::debug!(
                    path = %self.path.display(),
                    records = records.len(),
                    "loaded history"
                );
                Ok(HistoryStore::from_records(records))
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "history file is unreadable, starting with empty history"
                );
                Ok(HistoryStore::new())
            }
        }
    }

    /// Replace the file contents with `records`.
    pub fn save(&self, records: &[HistoryRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(records)?;
        let tmp_path = self.tmp_path();
        std::fs::write(&tmp_path, content)?;
        if let Err(e) = std::fs::rename(&tmp_path, &self.path) {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(e.into());
        }

        tracing::debug!(
            path = %self.path.display(),
            records = records.len(),
            "saved history"
        );
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "history.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

type Snapshot = Option<Arc<[HistoryRecord]>>;

/// Background writer with last-write-wins semantics.
pub struct HistoryWriter {
    tx: watch::Sender<Snapshot>,
    task: JoinHandle<Result<()>>,
}

impl HistoryWriter {
    /// Start the writer task. Must be called within a Tokio runtime.
    pub fn spawn(file: HistoryFile) -> Self {
        let (tx, rx) = watch::channel::<Snapshot>(None);
        let task = tokio::spawn(write_loop(file, rx));
        Self { tx, task }
    }

    /// Queue `records` for writing. Never blocks; replaces any snapshot
    /// that has not been written yet.
    pub fn submit(&self, records: Vec<HistoryRecord>) {
        self.tx.send_replace(Some(Arc::from(records)));
    }

    /// Write the latest snapshot and stop the task.
    ///
    /// Returns the error of the final write, if it failed.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.tx);
        self.task.await?
    }
}

async fn write_loop(file: HistoryFile, mut rx: watch::Receiver<Snapshot>) -> Result<()> {
    let mut last_written: Snapshot = None;
    let mut outcome = Ok(());

    loop {
        let closed = rx.changed().await.is_err();
        let snapshot = rx.borrow_and_update().clone();

        if let Some(records) = snapshot {
            let already_written = last_written
                .as_ref()
                .is_some_and(|prev| Arc::ptr_eq(prev, &records));

            if !already_written {
                let target = file.clone();
                let to_write = Arc::clone(&records);
                outcome = match tokio::task::spawn_blocking(move || target.save(&to_write)).await
                {
                    Ok(result) => result,
                    Err(e) => Err(CodesmithError::Persistence(e.to_string())),
                };
                match &outcome {
                    Ok(()) => last_written = Some(records),
                    Err(e) => tracing::warn!(
                        path = %file.path().display(),
                        error = %e,
                        "failed to persist history"
                    ),
                }
            }
        }

        if closed {
            break;
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::{AcceptAll, PromptSubmission};
    use crate::language::Language;
    use tempfile::TempDir;

    fn record(prompt: &str, language: Language) -> HistoryRecord {
        let sub = PromptSubmission::new(prompt, language, &AcceptAll).unwrap();
        HistoryRecord::new(&sub, format!("// {}", prompt))
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let file = HistoryFile::new(temp_dir.path().join("history.json"));
        assert!(file.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let file = HistoryFile::new(temp_dir.path().join("history.json"));

        let mut store = HistoryStore::new();
        store.append(record("sort an array", Language::Python));
        store.append(record("reverse a string", Language::Javascript));
        store.toggle_favorite(1).unwrap();

        file.save(store.all()).unwrap();
        let loaded = file.load().unwrap();

        assert_eq!(loaded, store);
        assert!(loaded.all()[1].is_favorite());
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("history.json");
        let file = HistoryFile::new(&path);

        file.save(&[record("p", Language::Go)]).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_save_leaves_no_tmp_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = HistoryFile::new(temp_dir.path().join("history.json"));
        file.save(&[record("p", Language::Go)]).unwrap();

        let names: Vec<_> = std::fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec!["history.json"]);
    }

    #[test]
    fn test_file_is_json_array() {
        let temp_dir = TempDir::new().unwrap();
        let file = HistoryFile::new(temp_dir.path().join("history.json"));
        file.save(&[record("p", Language::Ruby)]).unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["language"], "ruby");
        assert_eq!(value[0]["favorite"], false);
    }

    #[test]
    fn test_corrupt_file_loads_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("history.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = HistoryFile::new(&path).load().unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_unknown_language_in_file_loads_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("history.json");
        std::fs::write(
            &path,
            r#"[{"prompt":"p","language":"cobol","code":"","timestamp":"2025-01-01T00:00:00Z"}]"#,
        )
        .unwrap();

        assert!(HistoryFile::new(&path).load().unwrap().is_empty());
    }

    #[test]
    fn test_blank_prompt_in_file_loads_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("history.json");
        std::fs::write(
            &path,
            r#"[{"prompt":"","language":"go","code":"","timestamp":"2025-01-01T00:00:00Z"}]"#,
        )
        .unwrap();

        assert!(HistoryFile::new(&path).load().unwrap().is_empty());
    }

    #[test]
    fn test_failed_rename_removes_tmp_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("history.json");
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("occupied"), "x").unwrap();

        let file = HistoryFile::new(&path);
        assert!(file.save(&[record("p", Language::Go)]).is_err());
        assert!(!temp_dir.path().join("history.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_writer_persists_last_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let file = HistoryFile::new(temp_dir.path().join("history.json"));
        let writer = HistoryWriter::spawn(file.clone());

        let mut store = HistoryStore::new();
        for i in 0..5 {
            store.append(record(&format!("prompt {}", i), Language::Go));
            writer.submit(store.all().to_vec());
        }
        writer.shutdown().await.unwrap();

        let loaded = file.load().unwrap();
        assert_eq!(loaded, store);
    }

    #[tokio::test]
    async fn test_writer_clear_is_persisted() {
        let temp_dir = TempDir::new().unwrap();
        let file = HistoryFile::new(temp_dir.path().join("history.json"));
        file.save(&[record("old", Language::Go)]).unwrap();

        let writer = HistoryWriter::spawn(file.clone());
        writer.submit(Vec::new());
        writer.shutdown().await.unwrap();

        assert!(file.load().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_writer_without_submissions_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let file = HistoryFile::new(temp_dir.path().join("history.json"));

        HistoryWriter::spawn(file.clone()).shutdown().await.unwrap();
        assert!(!file.path().exists());
    }

    #[tokio::test]
    async fn test_writer_reports_failed_final_write() {
        let temp_dir = TempDir::new().unwrap();
        // A directory where the file should be makes the rename fail.
        let path = temp_dir.path().join("history.json");
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("occupied"), "x").unwrap();

        let writer = HistoryWriter::spawn(HistoryFile::new(&path));
        writer.submit(vec![record("p", Language::Go)]);
        assert!(writer.shutdown().await.is_err());
        assert!(!temp_dir.path().join("history.json.tmp").exists());
    }
}
