//! Application config: log file, typing animation, and the per-crate configs.

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

use llm_client::EnvLlmConfig;
use sentiment::EnvSentimentConfig;
use storage::EnvStorageConfig;

/// Default per-character delay of the typing reveal.
pub const DEFAULT_TYPING_DELAY_MS: u64 = 5;

/// Everything the binary needs, loaded from environment variables (optionally from `.env`).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_file: String,
    /// 0 disables the typing animation.
    pub typing_delay_ms: u64,
    pub storage: EnvStorageConfig,
    pub llm: EnvLlmConfig,
    pub sentiment: EnvSentimentConfig,
}

impl AppConfig {
    /// Loads `.env` if present, then reads the environment.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    pub fn from_env() -> Result<Self> {
        let log_file = env::var("LOG_FILE")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| "logs/reflect.log".to_string());
        let typing_delay_ms = env::var("TYPING_DELAY_MS")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_TYPING_DELAY_MS);
        Ok(Self {
            log_file,
            typing_delay_ms,
            storage: EnvStorageConfig::from_env().context("Load storage config")?,
            llm: EnvLlmConfig::from_env().context("Load LLM config")?,
            sentiment: EnvSentimentConfig::from_env().context("Load sentiment config")?,
        })
    }

    pub fn validate(&self) -> Result<()> {
        self.storage.validate().context("Invalid storage config")?;
        self.llm.validate().context("Invalid LLM config")?;
        self.sentiment.validate().context("Invalid sentiment config")?;
        Ok(())
    }

    pub fn typing_delay(&self) -> Duration {
        Duration::from_millis(self.typing_delay_ms)
    }
}
