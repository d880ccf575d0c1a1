use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::repositories::SlotRepository;

/// File-backed implementation of SlotRepository
///
/// Each slot is one file named `<key>.slot` inside the data directory. The
/// directory is created on first write.
pub struct FileSlotRepository {
    dir: PathBuf,
}

impl FileSlotRepository {
    /// Creates a repository rooted at `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the data directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.slot", key))
    }
}

#[async_trait]
impl SlotRepository for FileSlotRepository {
    async fn read(&self, key: &str) -> Result<Option<String>, String> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(format!("Failed to read slot {}: {}", key, e)),
        }
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), String> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| format!("Failed to create data directory: {}", e))?;

        tokio::fs::write(self.path_for(key), value)
            .await
            .map_err(|e| format!("Failed to write slot {}: {}", key, e))
    }

    async fn remove(&self, key: &str) -> Result<(), String> {
        match tokio::fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(format!("Failed to remove slot {}: {}", key, e)),
        }
    }
}
