//! # LLM client abstraction
//!
//! Defines the [`LlmClient`] trait, an OpenAI-compatible implementation, and the
//! [`ConversationClient`] that turns a reflection into one chat request and always hands back
//! a displayable string.

use anyhow::Result;
use async_trait::async_trait;
use openai_client::{
    ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
    ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
};
use prompt::{ChatMessage, MessageRole};

mod config;
mod conversation;
mod openai_llm;

pub use config::{EnvLlmConfig, LlmConfig, PLACEHOLDER_API_KEY};
pub use conversation::{format_api_error, ConversationClient, ERROR_MARKER};
pub use openai_llm::OpenAILlmClient;

/// LLM client interface: request a completion for a full list of messages (system/user/assistant).
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Returns the model reply text for the given messages, sent as-is.
    async fn get_llm_response_with_messages(&self, messages: Vec<ChatMessage>) -> Result<String>;
}

/// Converts a single [`ChatMessage`] into OpenAI API message format.
fn chat_message_to_openai(msg: &ChatMessage) -> Result<ChatCompletionRequestMessage> {
    let content = msg.content.clone();
    let openai_msg: ChatCompletionRequestMessage = match msg.role {
        MessageRole::System => ChatCompletionRequestSystemMessageArgs::default()
            .content(content)
            .build()?
            .into(),
        MessageRole::User => ChatCompletionRequestUserMessageArgs::default()
            .content(content)
            .build()?
            .into(),
        MessageRole::Assistant => ChatCompletionRequestAssistantMessageArgs::default()
            .content(content)
            .build()?
            .into(),
    };
    Ok(openai_msg)
}
