//! Sentiment configuration: trait, env-based implementation, and classifier selection.

use anyhow::Result;
use std::env;
use std::sync::Arc;

use tracing::info;

use crate::{HostedClassifier, LexiconClassifier, SentimentClassifier, DEFAULT_SENTIMENT_MODEL};

/// Sentiment classifier configuration interface.
pub trait SentimentConfig: Send + Sync {
    /// `lexicon` | `hosted`.
    fn provider(&self) -> &str;
    /// Bearer token for the hosted inference API.
    fn api_token(&self) -> &str;
    fn model(&self) -> &str;
    /// Full endpoint override for the hosted provider.
    fn api_url(&self) -> Option<&str>;
}

/// Sentiment config loaded from environment variables.
#[derive(Debug, Clone)]
pub struct EnvSentimentConfig {
    pub sentiment_provider: String,
    pub sentiment_api_token: String,
    pub sentiment_model: String,
    pub sentiment_api_url: Option<String>,
}

impl SentimentConfig for EnvSentimentConfig {
    fn provider(&self) -> &str {
        &self.sentiment_provider
    }
    fn api_token(&self) -> &str {
        &self.sentiment_api_token
    }
    fn model(&self) -> &str {
        &self.sentiment_model
    }
    fn api_url(&self) -> Option<&str> {
        self.sentiment_api_url.as_deref()
    }
}

impl EnvSentimentConfig {
    /// Load from environment variables.
    pub fn from_env() -> Result<Self> {
        let sentiment_provider = env::var("SENTIMENT_PROVIDER")
            .map(|s| s.trim().to_lowercase())
            .unwrap_or_else(|_| "lexicon".to_string());
        let sentiment_api_token = env::var("SENTIMENT_API_TOKEN")
            .or_else(|_| env::var("HF_API_TOKEN"))
            .unwrap_or_default();
        let sentiment_model = env::var("SENTIMENT_MODEL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SENTIMENT_MODEL.to_string());
        let sentiment_api_url = env::var("SENTIMENT_API_URL")
            .ok()
            .filter(|s| !s.trim().is_empty());
        Ok(Self {
            sentiment_provider,
            sentiment_api_token,
            sentiment_model,
            sentiment_api_url,
        })
    }

    /// Validate config (known provider; hosted requires a token).
    pub fn validate(&self) -> Result<()> {
        match self.sentiment_provider.as_str() {
            "lexicon" => Ok(()),
            "hosted" => {
                if self.sentiment_api_token.is_empty() {
                    anyhow::bail!(
                        "SENTIMENT_PROVIDER=hosted requires SENTIMENT_API_TOKEN or HF_API_TOKEN to be set"
                    );
                }
                Ok(())
            }
            other => anyhow::bail!(
                "Unknown SENTIMENT_PROVIDER: {} (expected lexicon or hosted)",
                other
            ),
        }
    }
}

/// Builds the classifier selected by `config`.
pub fn create_classifier(config: &dyn SentimentConfig) -> Result<Arc<dyn SentimentClassifier>> {
    let classifier: Arc<dyn SentimentClassifier> = match config.provider() {
        "lexicon" => Arc::new(LexiconClassifier::new()),
        "hosted" => {
            if config.api_token().is_empty() {
                anyhow::bail!("Hosted sentiment classifier requires an API token");
            }
            let mut hosted = HostedClassifier::new(config.api_token().to_string(), config.model());
            if let Some(url) = config.api_url() {
                hosted = hosted.with_endpoint(url);
            }
            info!(endpoint = %hosted.endpoint(), "Using hosted sentiment classifier");
            Arc::new(hosted)
        }
        other => anyhow::bail!("Unknown sentiment provider: {}", other),
    };
    Ok(classifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for var in [
            "SENTIMENT_PROVIDER",
            "SENTIMENT_API_TOKEN",
            "HF_API_TOKEN",
            "SENTIMENT_MODEL",
            "SENTIMENT_API_URL",
        ] {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_load_config_with_defaults() {
        clear_env();

        let config = EnvSentimentConfig::from_env().unwrap();

        assert_eq!(config.provider(), "lexicon");
        assert_eq!(config.api_token(), "");
        assert_eq!(config.model(), DEFAULT_SENTIMENT_MODEL);
        assert!(config.api_url().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_hf_token_fallback() {
        clear_env();
        env::set_var("SENTIMENT_PROVIDER", "Hosted");
        env::set_var("HF_API_TOKEN", "hf_abc");

        let config = EnvSentimentConfig::from_env().unwrap();
        assert_eq!(config.provider(), "hosted");
        assert_eq!(config.api_token(), "hf_abc");
        assert!(config.validate().is_ok());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_validate_hosted_without_token_fails() {
        clear_env();
        env::set_var("SENTIMENT_PROVIDER", "hosted");

        let config = EnvSentimentConfig::from_env().unwrap();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("SENTIMENT_API_TOKEN"));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_validate_unknown_provider_fails() {
        clear_env();
        env::set_var("SENTIMENT_PROVIDER", "vader");

        let config = EnvSentimentConfig::from_env().unwrap();
        assert!(config.validate().is_err());
        assert!(create_classifier(&config).is_err());

        clear_env();
    }

    #[tokio::test]
    async fn test_create_lexicon_classifier() {
        let config = EnvSentimentConfig {
            sentiment_provider: "lexicon".to_string(),
            sentiment_api_token: String::new(),
            sentiment_model: DEFAULT_SENTIMENT_MODEL.to_string(),
            sentiment_api_url: None,
        };

        let classifier = create_classifier(&config).unwrap();
        assert_eq!(classifier.classify("a good day").await.unwrap(), "positive");
    }
}
