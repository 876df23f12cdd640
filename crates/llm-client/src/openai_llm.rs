//! OpenAI-compatible [`LlmClient`]: wraps openai-client and sends messages unchanged.

use anyhow::Result;
use async_trait::async_trait;
use openai_client::mask_token;
use prompt::ChatMessage;
use tracing::{info, instrument};

use super::{chat_message_to_openai, LlmClient, LlmConfig};

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "deepseek/deepseek-chat-v3-0324:free";

/// [`LlmClient`] implementation on top of openai-client.
#[derive(Clone)]
pub struct OpenAILlmClient {
    client: openai_client::OpenAIClient,
    model: String,
}

impl OpenAILlmClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: openai_client::OpenAIClient::new(api_key),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: openai_client::OpenAIClient::with_base_url(api_key, base_url),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Builds a client from config: base URL, model, and the OpenRouter attribution headers.
    pub fn from_config(config: &dyn LlmConfig) -> Result<Self> {
        info!(
            base_url = %config.base_url(),
            model = %config.model(),
            api_key = %mask_token(config.api_key()),
            "Creating OpenAI-compatible LLM client"
        );
        let client = openai_client::OpenAIClient::with_headers(
            config.api_key().to_string(),
            config.base_url().to_string(),
            &[
                ("HTTP-Referer", config.http_referer()),
                ("X-Title", config.app_title()),
            ],
        )?;
        Ok(Self {
            client,
            model: config.model().to_string(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl LlmClient for OpenAILlmClient {
    #[instrument(skip(self, messages), fields(model = %self.model))]
    async fn get_llm_response_with_messages(&self, messages: Vec<ChatMessage>) -> Result<String> {
        let openai_messages = messages
            .iter()
            .map(chat_message_to_openai)
            .collect::<Result<Vec<_>>>()?;
        self.client
            .chat_completion(&self.model, openai_messages)
            .await
    }
}
