use std::{io::ErrorKind, path::PathBuf};

use serde::{Serialize, de::DeserializeOwned};

use crate::types::FoundEntry;

#[derive(Debug)]
pub enum StoreError {
    IoError(std::io::Error),
    SerdeError(serde_json::Error),
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::IoError(err)
    }
}

/// Persistence for the two output partitions of a matching run. Holds the
/// caller-supplied paths and reads/writes both collections as pretty-printed
/// UTF-8 JSON arrays (non-ASCII text stays unescaped).
pub struct MatchStore {
    found_path: PathBuf,
    not_found_path: PathBuf,
}

impl MatchStore {
    pub fn new(found_path: PathBuf, not_found_path: PathBuf) -> Self {
        Self {
            found_path,
            not_found_path,
        }
    }

    pub fn found_path(&self) -> &PathBuf {
        &self.found_path
    }

    pub fn not_found_path(&self) -> &PathBuf {
        &self.not_found_path
    }

    /// Loads previously matched identifiers. A missing file is an empty
    /// collection; unreadable or malformed content is an error.
    pub async fn load_found(&self) -> Result<Vec<FoundEntry>, StoreError> {
        let content = match async_fs::read_to_string(&self.found_path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::IoError(e)),
        };
        serde_json::from_str(&content).map_err(StoreError::SerdeError)
    }

    /// Loads the not-found records of an earlier run. Unlike
    /// [`load_found`](Self::load_found), a missing file is an error here:
    /// a recheck without misses to retry is a broken invocation.
    pub async fn load_not_found<R: DeserializeOwned>(&self) -> Result<Vec<R>, StoreError> {
        let content = async_fs::read_to_string(&self.not_found_path)
            .await
            .map_err(StoreError::IoError)?;
        serde_json::from_str(&content).map_err(StoreError::SerdeError)
    }

    /// Writes both partitions to their paths, creating parent directories
    /// as needed. Last write wins; no atomic replace (single-process tool).
    pub async fn persist<R: Serialize>(
        &self,
        found: &[FoundEntry],
        not_found: &[R],
    ) -> Result<(), StoreError> {
        Self::write_json(&self.found_path, found).await?;
        Self::write_json(&self.not_found_path, not_found).await
    }

    async fn write_json<T: Serialize + ?Sized>(path: &PathBuf, value: &T) -> Result<(), StoreError> {
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(StoreError::IoError)?;
        }

        let json = serde_json::to_string_pretty(value).map_err(StoreError::SerdeError)?;
        async_fs::write(path, json)
            .await
            .map_err(StoreError::IoError)
    }
}
