// JSON file store for the task collection

use crate::error::StorageError;
use crate::models::Task;
use fs2::FileExt;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// File name used when a store is opened on a directory
pub const TASK_FILE: &str = "tasks.json";

/// Persistence boundary between the in-memory collection and the task file
///
/// Every load reads the whole file and every save rewrites it. There is no
/// partial update.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Open the store kept as `tasks.json` inside the given directory
    pub fn open<P: AsRef<Path>>(dir: P) -> Self {
        Self::at(dir.as_ref().join(TASK_FILE))
    }

    /// Open a store backed by an explicit file path
    pub fn at<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Get the path of the task file
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the full collection, degrading to an empty one on failure
    ///
    /// A missing file is created holding an empty collection. An unreadable or
    /// malformed file is reported and left untouched; only a later save
    /// replaces it.
    pub fn load(&self) -> Vec<Task> {
        if !self.exists() {
            info!(path = ?self.path, "Task file not found, creating an empty one");
            if let Err(e) = self.save(&[]) {
                warn!(path = ?self.path, error = ?e, "Failed to create task file");
            }
            return Vec::new();
        }

        match self.read() {
            Ok(tasks) => tasks,
            Err(e) => {
                warn!(
                    path = ?self.path,
                    error = ?e,
                    "Failed to read task file, starting with an empty list"
                );
                Vec::new()
            }
        }
    }

    /// Read and parse the task file without any recovery
    pub fn read(&self) -> Result<Vec<Task>, StorageError> {
        let content = fs::read_to_string(&self.path).map_err(|source| StorageError::Read {
            path: self.path.clone(),
            source,
        })?;

        let tasks: Vec<Task> = serde_json::from_str(&content).map_err(|source| StorageError::Parse {
            path: self.path.clone(),
            source,
        })?;

        debug!(path = ?self.path, count = tasks.len(), "Loaded tasks");
        Ok(tasks)
    }

    /// Overwrite the task file with the full collection, pretty-printed
    pub fn save(&self, tasks: &[Task]) -> Result<(), StorageError> {
        let mut json = serde_json::to_string_pretty(tasks).map_err(StorageError::Serialize)?;
        json.push('\n');

        let write_err = |source: io::Error| StorageError::Write {
            path: self.path.clone(),
            source,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&self.path)
            .map_err(write_err)?;

        // Advisory only; not every platform or filesystem supports it
        if let Err(e) = file.lock_exclusive() {
            warn!(path = ?self.path, error = ?e, "Failed to acquire file lock, writing anyway");
        }

        file.set_len(0).map_err(write_err)?;
        file.write_all(json.as_bytes()).map_err(write_err)?;
        file.sync_all().map_err(write_err)?;

        debug!(path = ?self.path, count = tasks.len(), "Saved tasks");

        // Lock is automatically released when file is dropped
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Status;
    use tempfile::TempDir;

    fn sample_tasks() -> Vec<Task> {
        let mut first = Task::new(1, "write spec");
        first.set_status(Status::Done);
        let second = Task::new(2, "review spec");
        let mut third = Task::new(4, "ship it");
        third.set_status(Status::InProgress);
        vec![first, second, third]
    }

    #[test]
    fn test_open_uses_task_file() {
        let temp = TempDir::new().unwrap();
        let store = Store::open(temp.path());
        assert_eq!(store.path(), temp.path().join("tasks.json"));
        assert!(!store.exists());
    }

    #[test]
    fn test_load_missing_file_creates_empty_collection() {
        let temp = TempDir::new().unwrap();
        let store = Store::open(temp.path());

        let tasks = store.load();
        assert!(tasks.is_empty());
        assert!(store.exists());

        let content = fs::read_to_string(store.path()).unwrap();
        assert_eq!(content.trim(), "[]");
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let temp = TempDir::new().unwrap();
        let store = Store::open(temp.path());

        let tasks = sample_tasks();
        store.save(&tasks).unwrap();

        let loaded = store.load();
        assert_eq!(loaded, tasks);
    }

    #[test]
    fn test_save_is_pretty_printed() {
        let temp = TempDir::new().unwrap();
        let store = Store::open(temp.path());

        store.save(&sample_tasks()).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert!(content.starts_with("[\n  {\n    \"id\": 1,"));
        assert!(content.contains("\"status\": \"in-progress\""));
        assert!(content.contains("\"createdAt\""));
        assert!(content.ends_with("]\n"));
    }

    #[test]
    fn test_save_overwrites_longer_content() {
        let temp = TempDir::new().unwrap();
        let store = Store::open(temp.path());

        store.save(&sample_tasks()).unwrap();
        store.save(&[]).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert_eq!(content, "[]\n");
    }

    #[test]
    fn test_load_malformed_file_degrades_to_empty() {
        let temp = TempDir::new().unwrap();
        let store = Store::open(temp.path());
        fs::write(store.path(), "{not json").unwrap();

        let tasks = store.load();
        assert!(tasks.is_empty());

        // Bad file is left alone until something saves over it
        let content = fs::read_to_string(store.path()).unwrap();
        assert_eq!(content, "{not json");
    }

    #[test]
    fn test_read_malformed_file_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let store = Store::open(temp.path());
        fs::write(store.path(), r#"[{"id": 1}]"#).unwrap();

        let err = store.read().unwrap_err();
        assert!(matches!(err, StorageError::Parse { .. }));
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let store = Store::at(temp.path().join("missing").join("tasks.json"));

        let err = store.save(&sample_tasks()).unwrap_err();
        assert!(matches!(err, StorageError::Write { .. }));
    }

    #[test]
    fn test_load_with_unwritable_location_still_returns_empty() {
        let temp = TempDir::new().unwrap();
        let store = Store::at(temp.path().join("missing").join("tasks.json"));

        assert!(store.load().is_empty());
        assert!(!store.exists());
    }
}
