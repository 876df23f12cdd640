//! Storage configuration: trait, env-based implementation, and backend selection.

use std::env;
use std::sync::Arc;

use anyhow::Result;

use crate::error::StorageError;
use crate::history_store::HistoryStore;
use crate::inmemory_store::InMemoryHistoryStore;
use crate::json_file_store::JsonFileStore;
use crate::remote_store::RemoteDocumentStore;

/// Storage configuration interface.
pub trait StorageConfig: Send + Sync {
    /// `file` | `remote` | `memory`.
    fn backend(&self) -> &str;
    /// Directory holding one JSON file per user (file backend).
    fn log_dir(&self) -> &str;
    /// Database root URL (remote backend).
    fn remote_url(&self) -> Option<&str>;
    /// Optional auth token appended as `?auth=` (remote backend).
    fn remote_auth(&self) -> Option<&str>;
}

/// Storage config loaded from environment variables.
#[derive(Debug, Clone)]
pub struct EnvStorageConfig {
    pub storage_backend: String,
    pub log_dir: String,
    pub remote_db_url: Option<String>,
    pub remote_db_auth: Option<String>,
}

impl StorageConfig for EnvStorageConfig {
    fn backend(&self) -> &str {
        &self.storage_backend
    }
    fn log_dir(&self) -> &str {
        &self.log_dir
    }
    fn remote_url(&self) -> Option<&str> {
        self.remote_db_url.as_deref()
    }
    fn remote_auth(&self) -> Option<&str> {
        self.remote_db_auth.as_deref()
    }
}

impl EnvStorageConfig {
    /// Load from environment variables.
    pub fn from_env() -> Result<Self> {
        let storage_backend = env::var("STORAGE_BACKEND")
            .map(|s| s.trim().to_lowercase())
            .unwrap_or_else(|_| "file".to_string());
        let log_dir = env::var("LOG_DIR").unwrap_or_else(|_| "user_logs".to_string());
        let remote_db_url = env::var("REMOTE_DB_URL")
            .ok()
            .filter(|s| !s.trim().is_empty());
        let remote_db_auth = env::var("REMOTE_DB_AUTH")
            .ok()
            .filter(|s| !s.trim().is_empty());
        Ok(Self {
            storage_backend,
            log_dir,
            remote_db_url,
            remote_db_auth,
        })
    }

    /// Validate config (known backend; remote requires a parsable REMOTE_DB_URL).
    pub fn validate(&self) -> Result<()> {
        match self.storage_backend.as_str() {
            "file" | "memory" => Ok(()),
            "remote" => match self.remote_db_url.as_deref() {
                None => anyhow::bail!("STORAGE_BACKEND=remote requires REMOTE_DB_URL to be set"),
                Some(url) => {
                    if reqwest::Url::parse(url).is_err() {
                        anyhow::bail!("REMOTE_DB_URL is set but not a valid URL: {}", url);
                    }
                    Ok(())
                }
            },
            other => anyhow::bail!(
                "Unknown STORAGE_BACKEND: {} (expected file, remote or memory)",
                other
            ),
        }
    }
}

/// Builds the history store selected by `config`.
pub fn create_history_store(config: &dyn StorageConfig) -> Result<Arc<dyn HistoryStore>, StorageError> {
    let store: Arc<dyn HistoryStore> = match config.backend() {
        "file" => Arc::new(JsonFileStore::new(config.log_dir())?),
        "remote" => {
            let url = config.remote_url().ok_or_else(|| {
                StorageError::Config("REMOTE_DB_URL is required for the remote backend".to_string())
            })?;
            Arc::new(RemoteDocumentStore::new(
                url,
                config.remote_auth().map(str::to_string),
            )?)
        }
        "memory" => Arc::new(InMemoryHistoryStore::new()),
        other => {
            return Err(StorageError::Config(format!(
                "Unknown storage backend: {}",
                other
            )))
        }
    };
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        env::remove_var("STORAGE_BACKEND");
        env::remove_var("LOG_DIR");
        env::remove_var("REMOTE_DB_URL");
        env::remove_var("REMOTE_DB_AUTH");
    }

    #[test]
    #[serial]
    fn test_load_config_with_defaults() {
        clear_env();

        let config = EnvStorageConfig::from_env().unwrap();

        assert_eq!(config.backend(), "file");
        assert_eq!(config.log_dir(), "user_logs");
        assert!(config.remote_url().is_none());
        assert!(config.remote_auth().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_load_config_with_custom_values() {
        clear_env();
        env::set_var("STORAGE_BACKEND", " Remote ");
        env::set_var("REMOTE_DB_URL", "https://example.firebaseio.com");
        env::set_var("REMOTE_DB_AUTH", "secret");
        env::set_var("LOG_DIR", "/tmp/journal");

        let config = EnvStorageConfig::from_env().unwrap();

        assert_eq!(config.backend(), "remote");
        assert_eq!(config.log_dir(), "/tmp/journal");
        assert_eq!(config.remote_url(), Some("https://example.firebaseio.com"));
        assert_eq!(config.remote_auth(), Some("secret"));
        assert!(config.validate().is_ok());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_validate_remote_requires_url() {
        clear_env();
        env::set_var("STORAGE_BACKEND", "remote");

        let config = EnvStorageConfig::from_env().unwrap();
        assert!(config.validate().is_err());

        env::set_var("REMOTE_DB_URL", "not-a-valid-url");
        let config = EnvStorageConfig::from_env().unwrap();
        assert!(config.validate().is_err());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_validate_unknown_backend() {
        clear_env();
        env::set_var("STORAGE_BACKEND", "sqlite");

        let config = EnvStorageConfig::from_env().unwrap();
        assert!(config.validate().is_err());

        clear_env();
    }

    #[test]
    fn test_create_history_store_selects_backend() {
        let dir = tempfile::tempdir().unwrap();
        let file_config = EnvStorageConfig {
            storage_backend: "file".to_string(),
            log_dir: dir.path().join("logs").to_string_lossy().into_owned(),
            remote_db_url: None,
            remote_db_auth: None,
        };
        let store = create_history_store(&file_config).unwrap();
        assert_eq!(store.backend(), "file");
        assert!(dir.path().join("logs").is_dir());

        let memory_config = EnvStorageConfig {
            storage_backend: "memory".to_string(),
            ..file_config.clone()
        };
        assert_eq!(create_history_store(&memory_config).unwrap().backend(), "memory");

        let remote_config = EnvStorageConfig {
            storage_backend: "remote".to_string(),
            remote_db_url: Some("https://example.firebaseio.com".to_string()),
            ..file_config.clone()
        };
        assert_eq!(create_history_store(&remote_config).unwrap().backend(), "remote");

        let missing_url = EnvStorageConfig {
            storage_backend: "remote".to_string(),
            ..file_config
        };
        assert!(matches!(
            create_history_store(&missing_url),
            Err(StorageError::Config(_))
        ));
    }
}
