//! LLM configuration: trait and env-based implementation.

use anyhow::Result;
use std::env;

use prompt::{DEFAULT_HISTORY_WINDOW, DEFAULT_LANGUAGE};

/// Key used when neither OPENROUTER_API_KEY nor OPENAI_API_KEY is set. Requests will be rejected
/// by the API and surface as error answers.
pub const PLACEHOLDER_API_KEY: &str = "YOUR_API_KEY";

/// LLM configuration interface for OpenAI-compatible APIs.
pub trait LlmConfig: Send + Sync {
    fn api_key(&self) -> &str;
    fn base_url(&self) -> &str;
    fn model(&self) -> &str;
    /// Sent as `HTTP-Referer` (OpenRouter app attribution).
    fn http_referer(&self) -> &str;
    /// Sent as `X-Title` (OpenRouter app attribution).
    fn app_title(&self) -> &str;
    fn response_language(&self) -> &str;
    /// Number of prior exchanges replayed to the model.
    fn history_window(&self) -> usize;
    /// Persona override for the system message.
    fn system_prompt(&self) -> Option<&str>;
}

/// LLM config loaded from environment variables.
#[derive(Debug, Clone)]
pub struct EnvLlmConfig {
    pub api_key: String,
    pub llm_base_url: String,
    pub llm_model: String,
    pub llm_http_referer: String,
    pub llm_app_title: String,
    pub response_language: String,
    pub llm_history_window: usize,
    pub llm_system_prompt: Option<String>,
}

impl LlmConfig for EnvLlmConfig {
    fn api_key(&self) -> &str {
        &self.api_key
    }
    fn base_url(&self) -> &str {
        &self.llm_base_url
    }
    fn model(&self) -> &str {
        &self.llm_model
    }
    fn http_referer(&self) -> &str {
        &self.llm_http_referer
    }
    fn app_title(&self) -> &str {
        &self.llm_app_title
    }
    fn response_language(&self) -> &str {
        &self.response_language
    }
    fn history_window(&self) -> usize {
        self.llm_history_window
    }
    fn system_prompt(&self) -> Option<&str> {
        self.llm_system_prompt.as_deref()
    }
}

impl EnvLlmConfig {
    /// Load from environment variables.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("OPENROUTER_API_KEY")
            .or_else(|_| env::var("OPENAI_API_KEY"))
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| {
                tracing::warn!(
                    "Neither OPENROUTER_API_KEY nor OPENAI_API_KEY is set; using placeholder key"
                );
                PLACEHOLDER_API_KEY.to_string()
            });
        let llm_base_url = env::var("LLM_BASE_URL")
            .unwrap_or_else(|_| "https://openrouter.ai/api/v1".to_string());
        let llm_model = env::var("LLM_MODEL")
            .unwrap_or_else(|_| "deepseek/deepseek-chat-v3-0324:free".to_string());
        let llm_http_referer = env::var("LLM_HTTP_REFERER")
            .unwrap_or_else(|_| "https://chat.openai.com".to_string());
        let llm_app_title =
            env::var("LLM_APP_TITLE").unwrap_or_else(|_| "Reflective Chatbot".to_string());
        let response_language = env::var("RESPONSE_LANGUAGE")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());
        let llm_history_window = env::var("LLM_HISTORY_WINDOW")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_HISTORY_WINDOW);
        let llm_system_prompt = env::var("LLM_SYSTEM_PROMPT")
            .ok()
            .filter(|s| !s.trim().is_empty());
        Ok(Self {
            api_key,
            llm_base_url,
            llm_model,
            llm_http_referer,
            llm_app_title,
            response_language,
            llm_history_window,
            llm_system_prompt,
        })
    }

    /// Whether the placeholder key is in use (no real key configured).
    pub fn uses_placeholder_key(&self) -> bool {
        self.api_key == PLACEHOLDER_API_KEY
    }

    /// Validate config (base URL must parse).
    pub fn validate(&self) -> Result<()> {
        if reqwest::Url::parse(&self.llm_base_url).is_err() {
            anyhow::bail!("LLM_BASE_URL is not a valid URL: {}", self.llm_base_url);
        }
        Ok(())
    }
}
