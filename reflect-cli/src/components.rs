//! Component factory: builds the JournalService from config.

use anyhow::{Context, Result};
use std::sync::Arc;

use llm_client::{ConversationClient, LlmClient, OpenAILlmClient};
use reflect_session::JournalService;
use sentiment::create_classifier;
use storage::create_history_store;
use tracing::{info, instrument, warn};

use crate::config::AppConfig;

/// Creates the store, classifier and conversation client once and wires them together.
#[instrument(skip(config))]
pub fn build_service(config: &AppConfig) -> Result<JournalService> {
    let store = create_history_store(&config.storage).context("Create history store")?;
    info!(backend = store.backend(), "History store ready");

    let classifier = create_classifier(&config.sentiment).context("Create sentiment classifier")?;
    info!(provider = %config.sentiment.sentiment_provider, "Sentiment classifier ready");

    if config.llm.uses_placeholder_key() {
        warn!("No LLM API key configured; replies will be API errors");
    }
    let openai = OpenAILlmClient::from_config(&config.llm).context("Create LLM client")?;
    info!(model = %openai.model(), "LLM client ready");
    let llm: Arc<dyn LlmClient> = Arc::new(openai);
    let conversation = ConversationClient::from_config(llm, &config.llm);

    Ok(JournalService::new(store, classifier, conversation))
}
