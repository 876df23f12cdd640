//! # Sentiment classification
//!
//! Defines the [`SentimentClassifier`] interface used by the journaling pipeline to label each
//! reflection, plus two implementations:
//!
//! - [`HostedClassifier`]: calls a hosted inference endpoint for a pretrained sentiment model
//!   (Hugging Face inference API by default).
//! - [`LexiconClassifier`]: offline word-list classifier, no network needed.
//!
//! ## Example
//!
//! ```rust,no_run
//! use sentiment::{LexiconClassifier, SentimentClassifier};
//!
//! async fn example() -> anyhow::Result<()> {
//!     let classifier = LexiconClassifier::new();
//!     let label = classifier.classify("I had a wonderful day").await?;
//!     assert_eq!(label, "positive");
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;

mod config;
mod hosted;
mod lexicon;

pub use config::{create_classifier, EnvSentimentConfig, SentimentConfig};
pub use hosted::{HostedClassifier, DEFAULT_INFERENCE_URL, DEFAULT_SENTIMENT_MODEL};
pub use lexicon::LexiconClassifier;

/// Labels a piece of text with a sentiment.
#[async_trait]
pub trait SentimentClassifier: Send + Sync {
    /// Returns a lowercase label such as `positive`, `negative` or `neutral`.
    async fn classify(&self, text: &str) -> Result<String, anyhow::Error>;
}
