//! Storage crate: per-user interaction history behind one interchangeable interface.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`history_store`] – HistoryStore trait (load / append)
//! - [`json_file_store`] – JsonFileStore (one JSON file per user)
//! - [`remote_store`] – RemoteDocumentStore (`/users/<key>` under a remote database root)
//! - [`inmemory_store`] – InMemoryHistoryStore
//! - [`config`] – StorageConfig, EnvStorageConfig, create_history_store

mod config;
mod error;
mod history_store;
mod inmemory_store;
mod json_file_store;
mod remote_store;

pub use config::{create_history_store, EnvStorageConfig, StorageConfig};
pub use error::StorageError;
pub use history_store::HistoryStore;
pub use inmemory_store::InMemoryHistoryStore;
pub use json_file_store::JsonFileStore;
pub use remote_store::{document_key, RemoteDocumentStore, USERS_COLLECTION};
