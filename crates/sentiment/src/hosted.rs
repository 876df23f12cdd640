//! Hosted inference classifier (Hugging Face inference API compatible).

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::SentimentClassifier;

/// Base URL of the hosted inference API; the model id is appended as a path segment.
pub const DEFAULT_INFERENCE_URL: &str = "https://api-inference.huggingface.co/models";

/// Pretrained binary sentiment model used when none is configured.
pub const DEFAULT_SENTIMENT_MODEL: &str = "distilbert-base-uncased-finetuned-sst-2-english";

/// Sentiment classifier backed by a hosted text-classification model.
#[derive(Debug, Clone)]
pub struct HostedClassifier {
    client: Client,
    api_token: String,
    endpoint: String,
}

impl HostedClassifier {
    /// Creates a classifier for `model` on the default inference API.
    pub fn new(api_token: String, model: &str) -> Self {
        Self {
            client: Client::new(),
            api_token,
            endpoint: format!("{}/{}", DEFAULT_INFERENCE_URL, model),
        }
    }

    /// Uses [`DEFAULT_SENTIMENT_MODEL`].
    pub fn with_api_token(api_token: String) -> Self {
        Self::new(api_token, DEFAULT_SENTIMENT_MODEL)
    }

    /// Replaces the full endpoint URL (self-hosted inference servers, tests).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
}

#[derive(Debug, Deserialize)]
struct LabelScore {
    label: String,
    score: f64,
}

/// The API nests results per input when asked for one text; some servers return them flat.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InferenceResponse {
    Nested(Vec<Vec<LabelScore>>),
    Flat(Vec<LabelScore>),
}

impl InferenceResponse {
    fn into_scores(self) -> Vec<LabelScore> {
        match self {
            InferenceResponse::Nested(outer) => outer.into_iter().next().unwrap_or_default(),
            InferenceResponse::Flat(scores) => scores,
        }
    }
}

fn top_label(scores: Vec<LabelScore>) -> Option<String> {
    scores
        .into_iter()
        .max_by(|a, b| a.score.total_cmp(&b.score))
        .map(|s| s.label.to_lowercase())
}

#[async_trait]
impl SentimentClassifier for HostedClassifier {
    /// Sends `{"inputs": text}` with bearer auth and returns the highest-scoring label.
    ///
    /// # Errors
    ///
    /// Transport failures, non-2xx statuses (including a model that is still loading), and
    /// responses without any label.
    async fn classify(&self, text: &str) -> Result<String, anyhow::Error> {
        info!(
            endpoint = %self.endpoint,
            text_len = text.chars().count(),
            "Classifying sentiment via hosted model"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_token)
            .json(&InferenceRequest { inputs: text })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!(
                "Sentiment API error ({}): {}",
                status,
                error_text
            ));
        }

        let parsed: InferenceResponse = response.json().await?;
        let label = top_label(parsed.into_scores())
            .ok_or_else(|| anyhow::anyhow!("No sentiment label in response"))?;

        debug!(label = %label, "Sentiment classified");
        Ok(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(pairs: &[(&str, f64)]) -> Vec<LabelScore> {
        pairs
            .iter()
            .map(|(label, score)| LabelScore {
                label: label.to_string(),
                score: *score,
            })
            .collect()
    }

    #[test]
    fn test_top_label_picks_highest_score_lowercased() {
        let label = top_label(scores(&[("NEGATIVE", 0.02), ("POSITIVE", 0.98)]));
        assert_eq!(label.as_deref(), Some("positive"));
    }

    #[test]
    fn test_top_label_empty_is_none() {
        assert!(top_label(vec![]).is_none());
    }

    #[test]
    fn test_response_parses_nested_and_flat() {
        let nested: InferenceResponse =
            serde_json::from_str(r#"[[{"label":"NEGATIVE","score":0.9},{"label":"POSITIVE","score":0.1}]]"#)
                .unwrap();
        assert_eq!(top_label(nested.into_scores()).as_deref(), Some("negative"));

        let flat: InferenceResponse =
            serde_json::from_str(r#"[{"label":"POSITIVE","score":0.7}]"#).unwrap();
        assert_eq!(top_label(flat.into_scores()).as_deref(), Some("positive"));
    }

    #[test]
    fn test_default_endpoint_includes_model() {
        let classifier = HostedClassifier::with_api_token("hf_test".to_string());
        assert_eq!(
            classifier.endpoint(),
            "https://api-inference.huggingface.co/models/distilbert-base-uncased-finetuned-sst-2-english"
        );
    }
}
