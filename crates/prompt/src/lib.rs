//! # Prompt
//!
//! Builds the message list sent to the chat-completion API for one reflection.
//!
//! ## Format
//!
//! - **System**: `{persona} Respond in {language}. Personal context: {context}`
//! - **Window**: the last `window` prior exchanges, oldest first, each as a User message
//!   followed by an Assistant message
//! - **Current question**: final User message
//!
//! ## External interactions
//!
//! - **AI models**: Output is sent to OpenAI-compatible chat APIs (OpenRouter by default).

/// Role of a message, one-to-one with OpenAI Chat Completions API `role` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    /// System instruction (API `role: "system"`).
    System,
    /// User message (API `role: "user"`).
    User,
    /// Assistant message (API `role: "assistant"`).
    Assistant,
}

/// A single chat message, one-to-one with one element of OpenAI `messages` array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// Persona used when no custom persona is configured.
pub const DEFAULT_PERSONA: &str = "You're a reflective, friendly assistant.";

/// Response language used when none is requested.
pub const DEFAULT_LANGUAGE: &str = "English";

/// Number of prior exchanges replayed to the model.
pub const DEFAULT_HISTORY_WINDOW: usize = 3;

/// Renders the system instruction: persona, response language and personal context.
pub fn reflective_system_message(persona: Option<&str>, language: &str, context: &str) -> String {
    format!(
        "{} Respond in {}. Personal context: {}",
        persona.unwrap_or(DEFAULT_PERSONA).trim_end(),
        language,
        context
    )
}

/// Builds the full message list for one reflection.
///
/// # Arguments
///
/// * `persona` - Optional persona text; [`DEFAULT_PERSONA`] when `None`
/// * `language` - Target response language
/// * `context` - Context summary derived from the user's history
/// * `history` - Prior (question, answer) pairs of the current session, oldest first
/// * `window` - How many of the most recent pairs to keep
/// * `current_question` - The new user input
///
/// # Returns
///
/// `1 + 2 * min(window, history.len()) + 1` messages: system, the window, the question.
pub fn build_reflective_messages<H, Q, A>(
    persona: Option<&str>,
    language: &str,
    context: &str,
    history: H,
    window: usize,
    current_question: &str,
) -> Vec<ChatMessage>
where
    H: IntoIterator<Item = (Q, A)>,
    Q: AsRef<str>,
    A: AsRef<str>,
{
    let pairs: Vec<(Q, A)> = history.into_iter().collect();
    let start = pairs.len().saturating_sub(window);

    let mut messages = Vec::with_capacity(2 + 2 * (pairs.len() - start));
    messages.push(ChatMessage::system(reflective_system_message(
        persona, language, context,
    )));
    for (question, answer) in &pairs[start..] {
        messages.push(ChatMessage::user(question.as_ref()));
        messages.push(ChatMessage::assistant(answer.as_ref()));
    }
    messages.push(ChatMessage::user(current_question));
    messages
}
