//! Tests for the chat loop: scripted stdin, captured stdout, in-memory store, mock LLM.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use llm_client::{ConversationClient, LlmClient};
use prompt::ChatMessage;
use reflect_cli::{prompt_login, run_chat};
use reflect_core::UserKey;
use reflect_session::{JournalService, Session};
use sentiment::LexiconClassifier;
use storage::{HistoryStore, InMemoryHistoryStore};

/// Echoes the last user message back.
struct EchoLlm;

#[async_trait]
impl LlmClient for EchoLlm {
    async fn get_llm_response_with_messages(
        &self,
        messages: Vec<ChatMessage>,
    ) -> anyhow::Result<String> {
        let last = messages.last().map(|m| m.content.clone()).unwrap_or_default();
        Ok(format!("You said: {}", last))
    }
}

fn service(store: Arc<InMemoryHistoryStore>) -> JournalService {
    JournalService::new(
        store,
        Arc::new(LexiconClassifier::new()),
        ConversationClient::new(Arc::new(EchoLlm)),
    )
}

/// **Test: Greeting, reply, /history and /quit, with entries persisted.**
#[tokio::test]
async fn chat_session_replies_and_persists() {
    let store = Arc::new(InMemoryHistoryStore::new());
    let svc = service(store.clone());
    let mut session = Session::start("alice smith").unwrap();
    let mut input: &[u8] = b"I feel great today\n\n/history\n/quit\nnever read\n";
    let mut out = Vec::new();

    run_chat(&svc, &mut session, &mut input, &mut out, Duration::ZERO)
        .await
        .unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Hello Alice Smith! Start chatting below."));
    assert!(text.contains("You said: I feel great today\n"));
    assert!(text.contains("🗂️ Your Reflections"));
    assert!(text.contains("Sentiment: positive"));
    assert!(!text.contains("never read"));

    let key = UserKey::parse("Alice Smith").unwrap();
    let stored = store.load(&key).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].sentiment, "positive");
}

/// **Test: /new clears the transcript; the loop also ends at end of input.**
#[tokio::test]
async fn chat_new_resets_session() {
    let store = Arc::new(InMemoryHistoryStore::new());
    let svc = service(store.clone());
    let mut session = Session::start("bob").unwrap();
    let mut input: &[u8] = b"first\nsecond\n/new\n";
    let mut out = Vec::new();

    run_chat(&svc, &mut session, &mut input, &mut out, Duration::ZERO)
        .await
        .unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("New session started."));
    assert!(session.transcript().is_empty());
    assert_eq!(store.load(session.user()).await.unwrap().len(), 2);
}

/// **Test: Login prompt retries on an empty name and returns the session.**
#[tokio::test]
async fn login_retries_until_valid_name() {
    let mut input: &[u8] = b"   \nCarol\n";
    let mut out = Vec::new();

    let session = prompt_login(&mut input, &mut out).await.unwrap().unwrap();

    assert_eq!(session.user().as_str(), "carol");
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Username is empty"));
}

/// **Test: Login returns None when input ends.**
#[tokio::test]
async fn login_end_of_input_is_none() {
    let mut input: &[u8] = b"";
    let mut out = Vec::new();

    assert!(prompt_login(&mut input, &mut out).await.unwrap().is_none());
}

/// **Test: The entered line is stored as typed; only the line ending is dropped.**
#[tokio::test]
async fn chat_stores_question_as_typed() {
    let store = Arc::new(InMemoryHistoryStore::new());
    let svc = service(store.clone());
    let mut session = Session::start("dana").unwrap();
    let mut input: &[u8] = b"  spacing matters here \r\n  /quit  \r\n";
    let mut out = Vec::new();

    run_chat(&svc, &mut session, &mut input, &mut out, Duration::ZERO)
        .await
        .unwrap();

    let stored = store.load(session.user()).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].question, "  spacing matters here ");
    assert!(String::from_utf8(out).unwrap().contains("👋 Goodbye."));
}
