use async_trait::async_trait;
use reflect_core::{InteractionRecord, UserKey};

use crate::error::StorageError;

/// Per-user, append-only history of interaction records.
///
/// Implementations are interchangeable: the session pipeline only sees this trait.
/// `append` rewrites the whole history for the user (load, push, write); two writers on the
/// same key are not arbitrated and the later write wins.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Returns the user's records in insertion order; empty when the user is unknown.
    async fn load(&self, user: &UserKey) -> Result<Vec<InteractionRecord>, StorageError>;

    /// Appends `record` to the end of the user's history.
    async fn append(&self, user: &UserKey, record: &InteractionRecord) -> Result<(), StorageError>;

    /// Short backend name for logs (`file`, `remote`, `memory`).
    fn backend(&self) -> &'static str;
}
