//! # OpenAI-compatible API client
//!
//! Thin wrapper around [async-openai] for non-streaming chat completion against OpenAI or any
//! compatible endpoint (OpenRouter by default in this workspace). Extra default headers, such as
//! OpenRouter's `HTTP-Referer` / `X-Title` attribution headers, are carried by the underlying
//! reqwest client. Provides token masking for safe logging.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use async_openai::{config::OpenAIConfig, types::CreateChatCompletionRequestArgs, Client};
use backoff::{ExponentialBackoff, ExponentialBackoffBuilder};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

pub use async_openai::types::{
    ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
    ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
};

/// Masks an API key/token for safe logging: shows first 7 chars + "***" + last 4 chars.
/// If length <= 11, returns "***" to avoid leaking any part of the key.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    let len = chars.len();
    if len <= 11 {
        return "***".to_string();
    }
    let head: String = chars[..7].iter().collect();
    let tail: String = chars[len - 4..].iter().collect();
    format!("{}***{}", head, tail)
}

/// Backoff that never retries: each request is one HTTP call, and a rate-limited (429) reply is
/// returned as an error at once.
fn no_retry_backoff() -> ExponentialBackoff {
    ExponentialBackoffBuilder::new()
        .with_max_elapsed_time(Some(Duration::ZERO))
        .build()
}

/// Chat completion client. Holds the API key only for masked logging.
#[derive(Clone)]
pub struct OpenAIClient {
    client: Arc<Client<OpenAIConfig>>,
    api_key_for_logging: String,
}

impl OpenAIClient {
    /// Builds a client using the given API key and the default OpenAI base URL.
    pub fn new(api_key: String) -> Self {
        let api_key_for_logging = api_key.clone();
        let config = OpenAIConfig::new().with_api_key(api_key);
        Self {
            client: Arc::new(Client::with_config(config).with_backoff(no_retry_backoff())),
            api_key_for_logging,
        }
    }

    /// Builds a client with a custom base URL (e.g. OpenRouter, proxies, or test servers).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let api_key_for_logging = api_key.clone();
        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(base_url);
        Self {
            client: Arc::new(Client::with_config(config).with_backoff(no_retry_backoff())),
            api_key_for_logging,
        }
    }

    /// Builds a client with a custom base URL whose HTTP client sends `headers` on every request.
    ///
    /// Fails when a header name or value is not valid HTTP.
    pub fn with_headers(
        api_key: String,
        base_url: String,
        headers: &[(&str, &str)],
    ) -> anyhow::Result<Self> {
        let mut header_map = HeaderMap::new();
        for (name, value) in headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .with_context(|| format!("Invalid header name: {}", name))?;
            let value = HeaderValue::from_str(value)
                .with_context(|| format!("Invalid value for header {}", name))?;
            header_map.insert(name, value);
        }
        let http_client = reqwest::Client::builder()
            .default_headers(header_map)
            .build()
            .context("Failed to build HTTP client")?;

        let api_key_for_logging = api_key.clone();
        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(base_url);
        let client = Client::with_config(config)
            .with_http_client(http_client)
            .with_backoff(no_retry_backoff());
        Ok(Self {
            client: Arc::new(client),
            api_key_for_logging,
        })
    }

    /// Sends a chat completion request and returns the first choice's content.
    ///
    /// Logs masked API key and token usage; the request JSON is logged at debug level.
    /// Errors on transport failure, non-2xx status (no retries, 429 included), undecodable body,
    /// an empty choice list, or a choice without content.
    pub async fn chat_completion(
        &self,
        model: &str,
        messages: Vec<ChatCompletionRequestMessage>,
    ) -> anyhow::Result<String> {
        let message_count = messages.len();
        let masked = mask_token(&self.api_key_for_logging);

        tracing::info!(
            model = %model,
            message_count = message_count,
            api_key = %masked,
            "chat_completion request"
        );

        let request = CreateChatCompletionRequestArgs::default()
            .model(model)
            .messages(messages)
            .build()?;

        if let Ok(json) = serde_json::to_string_pretty(&request) {
            tracing::debug!(request_json = %json, "chat_completion request JSON");
        }

        let response = self.client.chat().create(request).await?;

        if let Some(ref u) = response.usage {
            tracing::info!(
                prompt_tokens = u.prompt_tokens,
                completion_tokens = u.completion_tokens,
                total_tokens = u.total_tokens,
                "chat_completion usage"
            );
        }

        match response.choices.first() {
            Some(choice) => choice
                .message
                .content
                .clone()
                .context("Chat completion choice has no content"),
            None => anyhow::bail!("No choices in chat completion response"),
        }
    }
}
