//! File-per-user JSON backend.
//!
//! Each user's history lives at `<dir>/<user_key>.json` as a pretty-printed JSON array.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use reflect_core::{InteractionRecord, UserKey};
use tracing::{debug, info, instrument};

use crate::error::StorageError;
use crate::history_store::HistoryStore;

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Creates the store, creating `dir` if it does not exist.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        info!(dir = %dir.display(), "Initialized JSON file history store");
        Ok(Self { dir })
    }

    /// Path of the JSON document holding `user`'s history.
    pub fn user_file(&self, user: &UserKey) -> PathBuf {
        self.dir.join(format!("{}.json", user.as_str()))
    }

    async fn read_all(&self, path: &Path) -> Result<Vec<InteractionRecord>, StorageError> {
        match tokio::fs::read(path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl HistoryStore for JsonFileStore {
    #[instrument(skip(self), fields(user = %user))]
    async fn load(&self, user: &UserKey) -> Result<Vec<InteractionRecord>, StorageError> {
        let path = self.user_file(user);
        let records = self.read_all(&path).await?;
        debug!(path = %path.display(), count = records.len(), "Loaded history");
        Ok(records)
    }

    #[instrument(skip(self, record), fields(user = %user))]
    async fn append(&self, user: &UserKey, record: &InteractionRecord) -> Result<(), StorageError> {
        let path = self.user_file(user);
        let mut records = self.read_all(&path).await?;
        records.push(record.clone());
        let json = serde_json::to_string_pretty(&records)?;
        tokio::fs::write(&path, json).await?;
        info!(path = %path.display(), count = records.len(), "Appended record");
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "file"
    }
}
