//! Conversation client: one reflection in, one displayable answer out.

use std::sync::Arc;

use prompt::{build_reflective_messages, DEFAULT_HISTORY_WINDOW, DEFAULT_LANGUAGE};
use reflect_core::InteractionRecord;
use tracing::{error, info, instrument};

use super::{LlmClient, LlmConfig};

/// Prefix of every answer that stands in for a failed API call.
pub const ERROR_MARKER: &str = "❌ API Error";

/// Renders an error as the user-visible answer text.
pub fn format_api_error(err: &anyhow::Error) -> String {
    format!("{}: {:#}", ERROR_MARKER, err)
}

/// Builds the bounded-window request for a reflection and calls the model.
///
/// Never fails: transport errors, non-2xx statuses and malformed responses come back as an
/// answer starting with [`ERROR_MARKER`].
#[derive(Clone)]
pub struct ConversationClient {
    llm: Arc<dyn LlmClient>,
    language: String,
    history_window: usize,
    persona: Option<String>,
}

impl ConversationClient {
    /// English answers, 3-exchange window, default persona.
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self {
            llm,
            language: DEFAULT_LANGUAGE.to_string(),
            history_window: DEFAULT_HISTORY_WINDOW,
            persona: None,
        }
    }

    /// Language, window and persona from config.
    pub fn from_config(llm: Arc<dyn LlmClient>, config: &dyn LlmConfig) -> Self {
        Self {
            llm,
            language: config.response_language().to_string(),
            history_window: config.history_window(),
            persona: config.system_prompt().map(str::to_string),
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_history_window(mut self, window: usize) -> Self {
        self.history_window = window;
        self
    }

    pub fn with_persona(mut self, persona: impl Into<String>) -> Self {
        self.persona = Some(persona.into());
        self
    }

    /// Asks in the configured language.
    pub async fn ask(&self, context: &str, input: &str, history: &[InteractionRecord]) -> String {
        self.ask_in(context, input, history, &self.language).await
    }

    /// Asks with an explicit response language.
    ///
    /// `history` is the current session's exchanges, oldest first; only the last
    /// `history_window` of them are sent.
    #[instrument(skip(self, context, input, history), fields(history_len = history.len()))]
    pub async fn ask_in(
        &self,
        context: &str,
        input: &str,
        history: &[InteractionRecord],
        language: &str,
    ) -> String {
        let messages = build_reflective_messages(
            self.persona.as_deref(),
            language,
            context,
            history
                .iter()
                .map(|r| (r.question.as_str(), r.answer.as_str())),
            self.history_window,
            input,
        );
        info!(message_count = messages.len(), language = %language, "Asking reflective assistant");

        match self.llm.get_llm_response_with_messages(messages).await {
            Ok(answer) => answer,
            Err(e) => {
                error!(error = %e, "Chat completion failed");
                format_api_error(&e)
            }
        }
    }
}
