//! In-memory backend: process-local, lost on exit. Used by tests and dry runs.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use reflect_core::{InteractionRecord, UserKey};
use tokio::sync::RwLock;

use crate::error::StorageError;
use crate::history_store::HistoryStore;

#[derive(Debug, Clone, Default)]
pub struct InMemoryHistoryStore {
    histories: Arc<RwLock<HashMap<UserKey, Vec<InteractionRecord>>>>,
}

impl InMemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of users with at least one record.
    pub async fn user_count(&self) -> usize {
        self.histories.read().await.len()
    }
}

#[async_trait]
impl HistoryStore for InMemoryHistoryStore {
    async fn load(&self, user: &UserKey) -> Result<Vec<InteractionRecord>, StorageError> {
        Ok(self
            .histories
            .read()
            .await
            .get(user)
            .cloned()
            .unwrap_or_default())
    }

    async fn append(&self, user: &UserKey, record: &InteractionRecord) -> Result<(), StorageError> {
        self.histories
            .write()
            .await
            .entry(user.clone())
            .or_default()
            .push(record.clone());
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
